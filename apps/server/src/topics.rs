//! Static catalog of finance topics served by `/api/topics`.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FinanceTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub summary: &'static str,
    pub keywords: &'static [&'static str],
    pub resources: &'static [&'static str],
}

static TOPICS: [FinanceTopic; 10] = [
    FinanceTopic {
        id: "investments",
        title: "Investments",
        description: "Learn about various investment vehicles and strategies",
        summary: "Investment is the act of allocating resources, usually money, with the expectation of generating income or profit. \
            Understanding different investment types, risk levels, and strategies is crucial for building wealth over time. \
            Common investment vehicles include stocks, bonds, mutual funds, ETFs, and real estate.",
        keywords: &["stocks", "bonds", "portfolio", "diversification", "ROI", "risk management"],
        resources: &[
            "https://www.investopedia.com/terms/i/investment.asp",
            "https://www.sec.gov/investor/pubs/investorpubs.htm",
            "https://www.investor.gov/introduction-investing",
        ],
    },
    FinanceTopic {
        id: "stock-markets",
        title: "Stock Markets",
        description: "Understanding stock exchanges and equity trading",
        summary: "Stock markets are venues where buyers and sellers meet to exchange equity shares of public corporations. \
            Major exchanges include NYSE, NASDAQ, and international markets. Stock prices fluctuate based on supply and demand, \
            company performance, economic indicators, and investor sentiment. Understanding market mechanics, indices, and trading strategies is essential for investors.",
        keywords: &["NYSE", "NASDAQ", "trading", "equities", "indices", "bull market", "bear market"],
        resources: &[
            "https://www.investopedia.com/terms/s/stockmarket.asp",
            "https://www.sec.gov/fast-answers/answersmrktstruchtm.html",
            "https://finance.yahoo.com/",
        ],
    },
    FinanceTopic {
        id: "bonds",
        title: "Bonds",
        description: "Fixed-income securities and debt instruments",
        summary: "Bonds are debt securities where an investor loans money to an entity (government or corporation) for a defined period at a fixed interest rate. \
            They are considered safer than stocks but typically offer lower returns. Types include government bonds, corporate bonds, municipal bonds, and treasury securities. \
            Bond prices and yields move inversely, and factors like credit ratings, duration, and interest rates affect their value.",
        keywords: &["fixed income", "yield", "treasury", "corporate bonds", "coupon rate", "maturity"],
        resources: &[
            "https://www.investopedia.com/terms/b/bond.asp",
            "https://www.investor.gov/introduction-investing/investing-basics/investment-products/bonds",
            "https://www.treasurydirect.gov/",
        ],
    },
    FinanceTopic {
        id: "cryptocurrencies",
        title: "Cryptocurrencies",
        description: "Digital currencies and blockchain technology",
        summary: "Cryptocurrencies are digital or virtual currencies that use cryptography for security and operate on decentralized networks based on blockchain technology. \
            Bitcoin, Ethereum, and thousands of altcoins exist. Crypto offers potential for high returns but comes with significant volatility and risk. \
            Key concepts include blockchain, mining, wallets, decentralized finance (DeFi), and smart contracts.",
        keywords: &["Bitcoin", "Ethereum", "blockchain", "DeFi", "altcoins", "crypto wallet", "mining"],
        resources: &[
            "https://www.investopedia.com/terms/c/cryptocurrency.asp",
            "https://www.coingecko.com/",
            "https://ethereum.org/en/what-is-ethereum/",
        ],
    },
    FinanceTopic {
        id: "personal-finance",
        title: "Personal Finance",
        description: "Budgeting, saving, and managing personal money",
        summary: "Personal finance encompasses budgeting, saving, investing, insurance, mortgages, retirement planning, and tax planning. \
            Key principles include living below your means, building an emergency fund, eliminating high-interest debt, and saving for retirement. \
            Financial literacy helps individuals make informed decisions about spending, saving, and investing for long-term financial security.",
        keywords: &["budgeting", "savings", "retirement planning", "emergency fund", "debt management", "financial literacy"],
        resources: &[
            "https://www.investopedia.com/personal-finance-4427760",
            "https://www.consumerfinance.gov/",
            "https://www.mymoney.gov/",
        ],
    },
    FinanceTopic {
        id: "real-estate",
        title: "Real Estate",
        description: "Property investment and real estate markets",
        summary: "Real estate involves buying, selling, and investing in property: residential, commercial, or industrial. \
            It's a tangible asset that can provide rental income, appreciation, and tax benefits. Real estate investment trusts (REITs) allow indirect investment. \
            Factors affecting real estate include location, market conditions, interest rates, and economic trends.",
        keywords: &["property", "REIT", "mortgage", "rental income", "appreciation", "commercial real estate"],
        resources: &[
            "https://www.investopedia.com/terms/r/realestate.asp",
            "https://www.nar.realtor/",
            "https://www.zillow.com/research/",
        ],
    },
    FinanceTopic {
        id: "banking",
        title: "Banking",
        description: "Banking systems, accounts, and financial services",
        summary: "Banking institutions provide financial services including deposits, loans, credit, and payment processing. \
            Types of accounts include checking, savings, money market, and certificates of deposit (CDs). Banks are regulated to ensure stability and protect consumers. \
            Understanding banking products, fees, interest rates, and digital banking tools is important for managing finances effectively.",
        keywords: &["checking account", "savings account", "loans", "credit", "interest rates", "online banking"],
        resources: &[
            "https://www.investopedia.com/terms/b/bank.asp",
            "https://www.fdic.gov/",
            "https://www.bankrate.com/",
        ],
    },
    FinanceTopic {
        id: "fintech",
        title: "Fintech",
        description: "Financial technology and digital innovation",
        summary: "Fintech (financial technology) refers to innovations that aim to compete with or enhance traditional financial services. \
            This includes mobile banking, peer-to-peer payments, robo-advisors, blockchain, and digital currencies. \
            Fintech improves accessibility, reduces costs, and increases efficiency in financial services through technology.",
        keywords: &["mobile payments", "robo-advisors", "digital wallets", "peer-to-peer lending", "insurtech", "neobanks"],
        resources: &[
            "https://www.investopedia.com/terms/f/fintech.asp",
            "https://www.mckinsey.com/industries/financial-services/our-insights",
            "https://techcrunch.com/tag/fintech/",
        ],
    },
    FinanceTopic {
        id: "risk-management",
        title: "Risk Management",
        description: "Identifying and mitigating financial risks",
        summary: "Risk management in finance involves identifying, analyzing, and mitigating potential losses in investments and financial decisions. \
            Strategies include diversification, hedging, insurance, and asset allocation. Understanding risk tolerance, risk-return tradeoff, and various types of risk \
            (market risk, credit risk, liquidity risk) is essential for protecting and growing wealth.",
        keywords: &["diversification", "hedging", "insurance", "risk assessment", "volatility", "asset allocation"],
        resources: &[
            "https://www.investopedia.com/terms/r/riskmanagement.asp",
            "https://www.cfa.org/",
            "https://www.prmia.org/",
        ],
    },
    FinanceTopic {
        id: "global-economy",
        title: "Global Economy",
        description: "International markets and macroeconomic trends",
        summary: "The global economy encompasses worldwide economic activities, trade, and financial flows. \
            Key factors include GDP growth, inflation, unemployment, interest rates, currency exchange, and geopolitical events. \
            Understanding macroeconomic indicators and international markets helps investors make informed decisions and anticipate market movements.",
        keywords: &["GDP", "inflation", "monetary policy", "trade", "emerging markets", "forex", "central banks"],
        resources: &[
            "https://www.investopedia.com/terms/g/globaleconomy.asp",
            "https://www.imf.org/",
            "https://www.worldbank.org/",
        ],
    },
];

pub fn all_topics() -> &'static [FinanceTopic] {
    &TOPICS
}

/// Exact, case-sensitive match on the topic id.
pub fn find_topic(id: &str) -> Option<&'static FinanceTopic> {
    TOPICS.iter().find(|topic| topic.id == id)
}
