//! Immutable process-wide configuration: company registry, location aliases,
//! and the term vocabularies used by the filter pipeline.
//!
//! Registry order is significant — it encodes default search priority
//! (MNCs with a local presence first, then regional unicorns/startups, then
//! remote-friendly companies) when no explicit target list is given.

use once_cell::sync::Lazy;

// ────────────────────────────────────────────────────────────────────────────
// Company registry — Greenhouse board slugs
// ────────────────────────────────────────────────────────────────────────────

/// Tier 1: MNCs / big tech with large India offices.
const GREENHOUSE_MNCS: &[&str] = &[
    "google",
    "meta",
    "amazon",
    "microsoft",
    "apple",
    "netflix",
    "uber",
    "linkedin",
    "salesforce",
    "adobe",
    "oracle",
    "vmware",
    "cisco",
    "nvidia",
    "intel",
    "qualcomm",
    "samsung",
    "databricks",
    "snowflake",
    "mongodb",
    "elastic",
    "confluent",
    "datadog",
    "splunk",
    "newrelic",
    "pagerduty",
    "stripe",
    "paypal",
    "visa",
    "mastercard",
    "square",
    "plaid",
    "coinbase",
    "atlassian",
    "servicenow",
    "workday",
    "twilio",
    "zendesk",
    "hubspot",
    "okta",
    "crowdstrike",
    "zscaler",
    "openai",
    "anthropic",
    "figma",
    "canva",
    "notion",
    "airtable",
    "asana",
    "dropbox",
    "box",
    "docusign",
    "zoom",
    "slack",
];

/// Tier 2: Indian unicorns and startups.
const GREENHOUSE_INDIA_STARTUPS: &[&str] = &[
    "razorpay",
    "groww",
    "cred",
    "slice",
    "jupiter-money",
    "fi-money",
    "smallcase",
    "niyo",
    "rupeek",
    "lendingkart",
    "swiggy",
    "zomato",
    "meesho",
    "nykaa",
    "myntra",
    "udaan",
    "bigbasket",
    "dunzo",
    "blinkit",
    "urbancompany",
    "ola",
    "rapido",
    "delhivery",
    "blackbuck",
    "rivigo",
    "byjus",
    "unacademy",
    "vedantu",
    "upgrad",
    "eruditus",
    "physicswallah",
    "scaler",
    "browserstack",
    "druva",
    "whatfix",
    "moengage",
    "clevertap",
    "leadsquared",
    "zoho",
    "freshworks",
    "chargebee",
    "pharmeasy",
    "practo",
    "healthifyme",
    "cult-fit",
    "dream11",
    "sharechat",
    "dailyhunt",
    "inmobi",
    "media-net",
];

/// Tier 3: Europe / remote-friendly companies.
const GREENHOUSE_EUROPE_REMOTE: &[&str] = &[
    "spotify",
    "klarna",
    "revolut",
    "wise",
    "n26",
    "monzo",
    "deliveroo",
    "zalando",
    "messagebird",
    "mollie",
    "adyen",
    "booking",
    "gitlab",
    "automattic",
    "canonical",
    "hotjar",
    "buffer",
    "doist",
    "zapier",
];

// ────────────────────────────────────────────────────────────────────────────
// Company registry — Lever board slugs
// ────────────────────────────────────────────────────────────────────────────

const LEVER_MNCS: &[&str] = &[
    "atlassian",
    "netflix",
    "spotify",
    "notion",
    "figma",
    "airtable",
    "vercel",
    "supabase",
    "linear",
    "retool",
    "planetscale",
    "neon",
    "miro",
];

const LEVER_INDIA_STARTUPS: &[&str] = &[
    "flipkart",
    "phonepe",
    "paytm",
    "postman",
    "hasura",
    "chargebee",
    "freshworks",
    "clevertap",
    "helpshift",
    "wingify",
    "haptik",
    "yellow-ai",
    "sprinklr",
    "gupshup",
];

const LEVER_EUROPE_REMOTE: &[&str] = &["remote", "oyster", "deel", "lattice", "loom", "netlify"];

/// All Greenhouse boards, in priority order.
pub static GREENHOUSE_COMPANIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    [GREENHOUSE_MNCS, GREENHOUSE_INDIA_STARTUPS, GREENHOUSE_EUROPE_REMOTE].concat()
});

/// All Lever boards, in priority order.
pub static LEVER_COMPANIES: Lazy<Vec<&'static str>> =
    Lazy::new(|| [LEVER_MNCS, LEVER_INDIA_STARTUPS, LEVER_EUROPE_REMOTE].concat());

// ────────────────────────────────────────────────────────────────────────────
// Location configuration
// ────────────────────────────────────────────────────────────────────────────

/// Canonical location name -> accepted aliases. Used both for filtering and
/// for priority-tier classification.
pub const LOCATION_ALIASES: &[(&str, &[&str])] = &[
    ("bengaluru", &["bengaluru", "bangalore", "blr"]),
    ("hyderabad", &["hyderabad", "hyd"]),
    ("mumbai", &["mumbai", "bombay"]),
    ("delhi", &["delhi", "ncr", "gurgaon", "gurugram", "noida"]),
    ("pune", &["pune"]),
    ("chennai", &["chennai", "madras"]),
    (
        "india",
        &[
            "india",
            "bengaluru",
            "bangalore",
            "hyderabad",
            "mumbai",
            "pune",
            "chennai",
            "delhi",
            "gurgaon",
            "noida",
        ],
    ),
    ("san francisco", &["san francisco", "sf", "bay area"]),
    ("new york", &["new york", "nyc", "ny", "manhattan", "brooklyn"]),
    ("seattle", &["seattle"]),
    ("austin", &["austin"]),
    ("boston", &["boston"]),
    ("london", &["london"]),
    ("berlin", &["berlin"]),
    (
        "remote",
        &["remote", "anywhere", "distributed", "work from home", "wfh"],
    ),
];

/// Canonical cities whose match terms also imply "india".
pub const INDIA_METROS: &[&str] = &["bengaluru", "hyderabad", "mumbai", "delhi", "pune", "chennai"];

/// Region term sets for the location-tier sort.
pub const INDIA_TERMS: &[&str] = &[
    "india",
    "bengaluru",
    "bangalore",
    "hyderabad",
    "mumbai",
    "pune",
    "chennai",
    "delhi",
    "gurgaon",
    "noida",
    "kolkata",
];

pub const EUROPE_TERMS: &[&str] = &[
    "uk",
    "london",
    "berlin",
    "germany",
    "amsterdam",
    "netherlands",
    "paris",
    "france",
    "dublin",
    "ireland",
    "stockholm",
    "sweden",
    "zurich",
    "switzerland",
    "europe",
    "barcelona",
    "spain",
    "lisbon",
    "portugal",
];

pub const US_TERMS: &[&str] = &[
    "usa",
    "united states",
    "san francisco",
    "new york",
    "seattle",
    "austin",
    "boston",
    "los angeles",
    "denver",
    "chicago",
    "california",
    "ca",
    "ny",
    "wa",
    "tx",
];

pub const REMOTE_TERMS: &[&str] = &["remote", "anywhere", "distributed", "work from home", "wfh"];

// ────────────────────────────────────────────────────────────────────────────
// Keyword filter vocabularies
// ────────────────────────────────────────────────────────────────────────────

/// Software/tech terms — a job title MUST contain one of these to pass the
/// keyword filter.
pub const SOFTWARE_TERMS: &[&str] = &[
    "software",
    "frontend",
    "backend",
    "fullstack",
    "full-stack",
    "full stack",
    "web",
    "mobile",
    "ios",
    "android",
    "cloud",
    "devops",
    "sre",
    "data",
    "machine learning",
    "ml",
    "ai",
    "artificial intelligence",
    "platform",
    "infrastructure",
    "security",
    "cybersecurity",
    "product",
    "ux",
    "ui",
    "design",
    "qa",
    "quality",
    "test",
    "automation",
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "node",
    "golang",
    "rust",
    "c++",
    "systems",
    "distributed",
    "api",
    "integration",
    "solutions",
    "technical",
    "tech",
    "it",
    "information technology",
    "computer",
    "application",
    "sde",
    "swe",
    "mts",
    "developer",
    "programmer",
    "coder",
    "engineering manager",
];

/// Non-software terms that disqualify a title outright.
pub const EXCLUDE_TERMS: &[&str] = &[
    "food",
    "mechanical",
    "civil",
    "electrical",
    "chemical",
    "industrial",
    "manufacturing",
    "structural",
    "environmental",
    "biomedical",
    "aerospace",
    "automotive",
    "marine",
    "nuclear",
    "petroleum",
    "agricultural",
    "mining",
    "hardware",
    "facilities",
    "maintenance",
    "hvac",
    "plumbing",
    "construction",
    "sales",
    "marketing",
    "hr",
    "human resources",
    "finance",
    "accounting",
    "legal",
    "compliance",
    "operations",
    "supply chain",
    "logistics",
    "warehouse",
    "customer success",
    "customer support",
    "receptionist",
    "administrative",
];

/// Generic engineering terms that admit software-related roles without
/// keyword overlap.
pub const GENERIC_ENGINEERING_TERMS: &[&str] =
    &["engineer", "developer", "sde", "swe", "programmer"];

/// Tokens dropped when splitting keywords into words.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "at", "in", "on", "for", "to", "of", "i", "ii", "iii", "iv", "v",
];

// ────────────────────────────────────────────────────────────────────────────
// Seniority configuration
// ────────────────────────────────────────────────────────────────────────────

/// Seniority level -> title keywords, in level order.
pub const SENIORITY_KEYWORDS: &[(&str, &[&str])] = &[
    ("intern", &["intern", "internship"]),
    (
        "junior",
        &["junior", "entry", "associate", "new grad", "graduate", "i", "1"],
    ),
    ("mid", &["mid", "ii", "2", "iii", "3"]),
    ("senior", &["senior", "sr", "lead", "iv", "4"]),
    (
        "staff",
        &["staff", "principal", "architect", "v", "5", "distinguished"],
    ),
    ("manager", &["manager", "director", "head", "vp", "chief"]),
];

/// Title keyword -> (min_years, max_years) fallback table, checked in order.
/// First keyword found in the title wins.
pub const TITLE_EXPERIENCE_HINTS: &[(&str, (u8, u8))] = &[
    ("intern", (0, 1)),
    ("junior", (0, 2)),
    ("entry", (0, 2)),
    ("associate", (1, 3)),
    ("mid", (2, 5)),
    ("senior", (5, 10)),
    ("sr", (5, 10)),
    ("staff", (8, 15)),
    ("principal", (10, 20)),
    ("distinguished", (15, 25)),
    ("architect", (8, 15)),
    ("lead", (5, 12)),
    ("manager", (5, 15)),
    ("director", (10, 20)),
    ("vp", (12, 25)),
    ("head", (10, 20)),
];

/// Keywords for one seniority level, empty for unknown levels.
pub fn seniority_level_keywords(level: &str) -> &'static [&'static str] {
    SENIORITY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == level)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_starts_with_mncs() {
        assert_eq!(GREENHOUSE_COMPANIES[0], "google");
        assert_eq!(LEVER_COMPANIES[0], "atlassian");
        // tiers are concatenated, not interleaved
        let gh_europe_start = GREENHOUSE_MNCS.len() + GREENHOUSE_INDIA_STARTUPS.len();
        assert_eq!(GREENHOUSE_COMPANIES[gh_europe_start], "spotify");
    }

    #[test]
    fn test_india_metros_are_aliased() {
        for metro in INDIA_METROS {
            assert!(
                LOCATION_ALIASES.iter().any(|(canonical, _)| canonical == metro),
                "missing alias entry for {metro}"
            );
        }
    }

    #[test]
    fn test_seniority_level_keywords_lookup() {
        assert!(seniority_level_keywords("staff").contains(&"principal"));
        assert!(seniority_level_keywords("unknown").is_empty());
    }
}
