//! Roadmap content model
//!
//! The roadmap is a fixed, ordered list of categories. Each category carries
//! three tiers of learning topics. Order of the slice is the display order of
//! the tab strip, the tree view and the CLI output.

use serde::Serialize;

/// Tab key that selects the tree summary instead of a category
pub const SUMMARY_KEY: &str = "summary";

/// Label of the summary tab
pub const SUMMARY_TAB_LABEL: &str = "Summary Tree";

/// Page heading
pub const ROADMAP_TITLE: &str = "Kelaasor Frontend Development Roadmap";

/// Title of the tree view root node
pub const TREE_ROOT_TITLE: &str = "Frontend Development Roadmap";

/// Skill tier within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Junior,
    Mid,
    Senior,
}

impl Tier {
    /// Get all tiers in display order
    pub fn all() -> &'static [Tier] {
        &[Tier::Junior, Tier::Mid, Tier::Senior]
    }

    /// Section heading for this tier
    pub fn title(&self) -> &'static str {
        match self {
            Tier::Junior => "Junior Level",
            Tier::Mid => "Mid Level",
            Tier::Senior => "Senior Level",
        }
    }

    /// Short lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Junior => "junior",
            Tier::Mid => "mid",
            Tier::Senior => "senior",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A roadmap category with its three tiers of topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub title: &'static str,
    pub junior: &'static [&'static str],
    pub mid: &'static [&'static str],
    pub senior: &'static [&'static str],
}

impl Category {
    /// Items of one tier, in display order
    pub fn items(&self, tier: Tier) -> &'static [&'static str] {
        match tier {
            Tier::Junior => self.junior,
            Tier::Mid => self.mid,
            Tier::Senior => self.senior,
        }
    }

    /// Total number of items across all tiers
    pub fn item_count(&self) -> usize {
        self.junior.len() + self.mid.len() + self.senior.len()
    }
}

static CATEGORIES: &[Category] = &[
    Category {
        key: "core",
        title: "Core Technologies",
        junior: &[
            "HTML5 fundamentals and semantic markup",
            "CSS3 basics including Flexbox and Grid",
            "Basic JavaScript (ES6+)",
            "Basic Tailwind CSS",
        ],
        mid: &[
            "Advanced CSS (SCSS, CSS Modules)",
            "Advanced JavaScript concepts",
            "Advanced Tailwind CSS patterns",
        ],
        senior: &[
            "CSS architecture and optimization",
            "JavaScript performance optimization",
            "Complex responsive layouts",
        ],
    },
    Category {
        key: "frameworks",
        title: "Frameworks and Libraries",
        junior: &[
            "Basic React concepts and hooks",
            "React Router DOM basics",
            "Basic state management with Redux",
            "Axios for API calls",
        ],
        mid: &[
            "Advanced React patterns",
            "Next.js fundamentals",
            "Complex state management",
            "Form handling with React Hook Form & Yup",
        ],
        senior: &[
            "Advanced Next.js features",
            "Performance optimization",
            "Custom hook development",
            "Advanced state management patterns",
        ],
    },
    Category {
        key: "styling",
        title: "Styling Libraries",
        junior: &[
            "Material UI basics",
            "Basic component styling",
            "Understanding design systems",
        ],
        mid: &[
            "Multiple UI library proficiency",
            "Styled Components",
            "Custom theming",
        ],
        senior: &[
            "Creating design systems",
            "Performance optimization",
            "Custom UI library development",
        ],
    },
    Category {
        key: "testing",
        title: "Testing",
        junior: &[
            "Basic unit testing with Jest",
            "React Testing Library basics",
            "Understanding test coverage",
        ],
        mid: &[
            "Integration testing",
            "E2E testing with Cypress",
            "Test-driven development basics",
        ],
        senior: &[
            "Advanced testing patterns",
            "Testing architecture",
            "Performance testing",
            "Accessibility testing",
        ],
    },
    Category {
        key: "tools",
        title: "Build Tools & Others",
        junior: &[
            "Basic Git commands",
            "npm/yarn basics",
            "Basic Webpack concepts",
        ],
        mid: &[
            "Git workflow mastery",
            "Docker basics",
            "Advanced build optimization",
        ],
        senior: &[
            "CI/CD implementation",
            "Build tool optimization",
            "Infrastructure decisions",
        ],
    },
    Category {
        key: "soft",
        title: "Soft Skills",
        junior: &[
            "Basic time management",
            "Team collaboration",
            "Communication skills",
            "Problem-solving basics",
        ],
        mid: &[
            "Project management",
            "Mentoring juniors",
            "Technical documentation",
            "Cross-team collaboration",
        ],
        senior: &[
            "Leadership skills",
            "Architecture planning",
            "Team building",
            "Strategic thinking",
            "Stakeholder management",
        ],
    },
];

/// All categories in display order (the summary pseudo-category excluded)
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Look up a category by key
pub fn find(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// All tab keys in tab strip order, summary first
pub fn tab_keys() -> Vec<&'static str> {
    std::iter::once(SUMMARY_KEY)
        .chain(CATEGORIES.iter().map(|c| c.key))
        .collect()
}

/// Display label for a tab key
pub fn tab_label(key: &str) -> Option<&'static str> {
    if key == SUMMARY_KEY {
        Some(SUMMARY_TAB_LABEL)
    } else {
        find(key).map(|c| c.title)
    }
}

/// Comma separated category keys (summary excluded), used in error hints
pub fn category_keys() -> String {
    CATEGORIES
        .iter()
        .map(|c| c.key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check the structural invariants of the content literal.
///
/// Returns a description of the first violation found. A violation is a
/// programming defect, so this is only called from tests.
pub fn validate() -> std::result::Result<(), String> {
    let keys = tab_keys();
    for (i, key) in keys.iter().enumerate() {
        if keys[..i].contains(key) {
            return Err(format!("duplicate tab key '{}'", key));
        }
    }

    let summary_count = keys.iter().filter(|k| **k == SUMMARY_KEY).count();
    if summary_count != 1 {
        return Err(format!("expected one summary key, found {}", summary_count));
    }

    for category in CATEGORIES {
        if category.title.is_empty() {
            return Err(format!("category '{}' has an empty title", category.key));
        }
        for tier in Tier::all() {
            if category.items(*tier).iter().any(|item| item.trim().is_empty()) {
                return Err(format!(
                    "category '{}' has an empty {} item",
                    category.key, tier
                ));
            }
        }
    }

    Ok(())
}
