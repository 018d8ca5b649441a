// ABOUTME: Keyword rule tables for conversation context extraction
// ABOUTME: Fixed phrase-to-signal mappings evaluated in deterministic order

/// Scalar context field a rule can assign (set once, first match wins)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    ProjectType,
    TeamSize,
    Timeline,
    TechnicalBackground,
}

/// Tag set a rule can add to (additive, deduplicated)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Requirement,
    Concern,
}

/// Target of a keyword rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    Scalar(ScalarField),
    Tag(TagField),
}

/// One phrase-to-signal mapping
///
/// Keywords are stored lowercase; the extractor lowercases message text once
/// and checks for substring containment.
#[derive(Debug)]
pub struct KeywordRule {
    pub target: RuleTarget,
    pub keywords: &'static [&'static str],
    pub value: &'static str,
}

impl KeywordRule {
    /// True if any keyword occurs in the (already lowercased) text
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

const fn scalar(
    field: ScalarField,
    keywords: &'static [&'static str],
    value: &'static str,
) -> KeywordRule {
    KeywordRule {
        target: RuleTarget::Scalar(field),
        keywords,
        value,
    }
}

const fn tag(
    field: TagField,
    keywords: &'static [&'static str],
    value: &'static str,
) -> KeywordRule {
    KeywordRule {
        target: RuleTarget::Tag(field),
        keywords,
        value,
    }
}

/// The full extraction rule table
///
/// Table order is part of the contract: scalar fields take the value of the
/// first rule that matches while the field is unset. The keyword lists are
/// product tuning, not design; they err toward recall over precision.
pub const RULES: &[KeywordRule] = &[
    // Project type
    scalar(
        ScalarField::ProjectType,
        &["saas", "software as a service"],
        "saas",
    ),
    scalar(
        ScalarField::ProjectType,
        &["marketplace", "two-sided platform"],
        "marketplace",
    ),
    scalar(
        ScalarField::ProjectType,
        &["e-commerce", "ecommerce", "online store", "online shop"],
        "ecommerce",
    ),
    scalar(ScalarField::ProjectType, &["blog"], "blog"),
    scalar(
        ScalarField::ProjectType,
        &["mobile app", "ios app", "android app"],
        "mobile",
    ),
    scalar(
        ScalarField::ProjectType,
        &["rest api", "public api", "an api"],
        "api",
    ),
    scalar(ScalarField::ProjectType, &["dashboard"], "dashboard"),
    scalar(ScalarField::ProjectType, &["landing page"], "landing-page"),
    scalar(ScalarField::ProjectType, &["internal tool"], "internal-tool"),
    // Team size
    scalar(
        ScalarField::TeamSize,
        &["solo", "by myself", "on my own", "alone", "just me"],
        "solo",
    ),
    scalar(
        ScalarField::TeamSize,
        &["our team", "my team", "co-founder", "cofounder", "we are a", "we're a", "small team"],
        "team",
    ),
    // Timeline
    scalar(
        ScalarField::Timeline,
        &["asap", "as soon as possible", "urgent", "quickly", "right away", "tight deadline"],
        "urgent",
    ),
    scalar(
        ScalarField::Timeline,
        &["no rush", "no deadline", "flexible", "long term", "take my time", "side project"],
        "flexible",
    ),
    // Technical background
    // Beginner rules come first so "inexperienced" never triggers the
    // "experienced" substring in the advanced rule.
    scalar(
        ScalarField::TechnicalBackground,
        &["beginner", "new to", "non-technical", "no coding", "never coded", "inexperienced"],
        "beginner",
    ),
    scalar(
        ScalarField::TechnicalBackground,
        &["years of experience", "experienced", "senior developer", "senior engineer", "advanced"],
        "advanced",
    ),
    // Requirements
    tag(
        TagField::Requirement,
        &["authentication", "auth", "login", "log in", "sign up", "signup", "user accounts"],
        "authentication",
    ),
    tag(
        TagField::Requirement,
        &["payment", "billing", "checkout", "subscriptions"],
        "payments",
    ),
    tag(
        TagField::Requirement,
        &["real-time", "realtime", "live updates", "websocket"],
        "realtime",
    ),
    tag(
        TagField::Requirement,
        &["analytics", "usage metrics", "tracking"],
        "analytics",
    ),
    tag(
        TagField::Requirement,
        &["email notification", "send emails", "transactional email", "newsletter"],
        "email",
    ),
    tag(TagField::Requirement, &["search"], "search"),
    tag(
        TagField::Requirement,
        &["file upload", "upload files", "image upload", "file storage"],
        "file-upload",
    ),
    tag(
        TagField::Requirement,
        &["admin panel", "admin dashboard", "back office"],
        "admin",
    ),
    tag(
        TagField::Requirement,
        &["integration", "third-party", "external api", "webhook"],
        "integrations",
    ),
    // Concerns
    tag(
        TagField::Concern,
        &["cost", "expensive", "budget", "cheap", "affordable"],
        "cost",
    ),
    tag(
        TagField::Concern,
        &["vendor lock-in", "lock-in", "locked into"],
        "vendor-lock-in",
    ),
    tag(
        TagField::Concern,
        &["scalability", "scaling", "scale"],
        "scalability",
    ),
    tag(
        TagField::Concern,
        &["security", "secure", "gdpr", "compliance"],
        "security",
    ),
    tag(
        TagField::Concern,
        &["maintenance", "maintain", "hard to update"],
        "maintenance",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercase() {
        for rule in RULES {
            for keyword in rule.keywords {
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "keyword '{}' must be lowercase",
                    keyword
                );
            }
        }
    }

    #[test]
    fn test_no_empty_keyword_lists() {
        for rule in RULES {
            assert!(!rule.keywords.is_empty());
            assert!(!rule.value.is_empty());
        }
    }

    #[test]
    fn test_rule_matching_is_substring_based() {
        let rule = &RULES[0];
        assert!(rule.matches("i want to build a saas application"));
        assert!(!rule.matches("i want to build a thing"));
    }

    #[test]
    fn test_beginner_rule_precedes_advanced_rule() {
        let background_values: Vec<&str> = RULES
            .iter()
            .filter(|r| r.target == RuleTarget::Scalar(ScalarField::TechnicalBackground))
            .map(|r| r.value)
            .collect();
        assert_eq!(background_values, vec!["beginner", "advanced"]);
    }
}
