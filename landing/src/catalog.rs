//! Static content for the marketing pages: feature lists, language coverage,
//! roadmap and the implementation guide's reference tables.
//!
//! Anything that embeds the CLI binary name is a function of it, so the
//! pages stay in sync with `site.toml`.

use crate::sections::icons::{
    ICON_CHECK, ICON_DOWNLOAD, ICON_FOLDER, ICON_GRAPH, ICON_LIGHTNING, ICON_ROBOT,
    ICON_SQUARES_FOUR, ICON_TERMINAL, ICON_WARNING_CIRCLE,
};

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

/// Short card: icon, title, one line of copy.
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MAIN_FEATURES: &[Feature] = &[
    Feature {
        icon: ICON_SQUARES_FOUR,
        title: "Analyze 30+ File Types",
        description: "Support for Python, JavaScript, TypeScript, HTML, CSS, JSON, YAML, and many more \
            programming languages and formats. Insight automatically detects file types and applies \
            appropriate analysis strategies.",
        details: &[
            "Python (.py) - Full AST analysis",
            "JavaScript/TypeScript (.js, .ts, .jsx, .tsx)",
            "Web technologies (HTML, CSS, SCSS)",
            "Configuration files (JSON, YAML, XML)",
            "Shell scripts (.sh, .bash)",
            "And 20+ more formats",
        ],
    },
    Feature {
        icon: ICON_FOLDER,
        title: "Generate Markdown Reports",
        description: "Beautiful, structured reports in Markdown format with comprehensive analysis and \
            insights. Reports include syntax highlighting, tables, and visualizations that are easy to \
            read and share.",
        details: &[
            "Structured sections with clear hierarchy",
            "Syntax-highlighted code snippets",
            "Formatted tables for metrics",
            "Embedded charts and graphs",
            "Export-ready documentation",
            "GitHub-compatible formatting",
        ],
    },
    Feature {
        icon: ICON_GRAPH,
        title: "Collect Static Metrics",
        description: "Detailed metrics including lines of code, functions, classes, imports, and comment \
            ratios. Get a complete picture of your codebase's structure and complexity.",
        details: &[
            "Lines of Code (LOC) analysis",
            "Function and class counting",
            "Import dependency tracking",
            "Comment ratio calculation",
            "Cyclomatic complexity metrics",
            "Code duplication detection",
        ],
    },
    Feature {
        icon: ICON_ROBOT,
        title: "AI-Powered Explanations",
        description: "Get intelligent code analysis with LLM probability scores and actionable insights. \
            Our AI understands context and provides meaningful recommendations.",
        details: &[
            "Context-aware code explanations",
            "Confidence scores for predictions",
            "Actionable improvement suggestions",
            "Pattern recognition and best practices",
            "Security vulnerability detection",
            "Performance optimization hints",
        ],
    },
];

pub const EXTRA_CAPABILITIES: &[Highlight] = &[
    Highlight {
        icon: ICON_LIGHTNING,
        title: "Lightning Fast",
        description: "Optimized algorithms ensure quick analysis even for large codebases",
    },
    Highlight {
        icon: ICON_WARNING_CIRCLE,
        title: "Privacy First",
        description: "All analysis happens locally - your code never leaves your machine",
    },
    Highlight {
        icon: ICON_GRAPH,
        title: "Git Integration",
        description: "Analyze specific branches, commits, or track changes over time",
    },
    Highlight {
        icon: ICON_DOWNLOAD,
        title: "Dependency Analysis",
        description: "Understand your project's dependencies and their relationships",
    },
    Highlight {
        icon: ICON_SQUARES_FOUR,
        title: "Pattern Detection",
        description: "Identify common patterns, anti-patterns, and code smells",
    },
    Highlight {
        icon: ICON_FOLDER,
        title: ".insightignore Support",
        description: "Exclude files and directories from analysis with gitignore-style patterns",
    },
    Highlight {
        icon: ICON_TERMINAL,
        title: "CLI & Scriptable",
        description: "Integrate into your CI/CD pipeline or automation workflows",
    },
    Highlight {
        icon: ICON_CHECK,
        title: "Quality Scoring",
        description: "Get an overall quality score based on multiple code health metrics",
    },
];

/// Home page highlight cards; each one links to the features page.
pub const HOME_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: ICON_SQUARES_FOUR,
        title: "30+ File Types",
        description: "Comprehensive language support",
    },
    Highlight {
        icon: ICON_FOLDER,
        title: "Markdown Reports",
        description: "Beautiful structured output",
    },
    Highlight {
        icon: ICON_GRAPH,
        title: "Static Metrics",
        description: "Detailed code analysis",
    },
    Highlight {
        icon: ICON_ROBOT,
        title: "AI-Powered",
        description: "Intelligent insights",
    },
];

pub const KEY_POINTS: &[&str] = &[
    "Support for 30+ programming languages and file formats",
    "Detailed metrics including LOC, complexity, and code patterns",
    "AI-powered explanations with confidence scores",
    "Beautiful Markdown reports ready to share",
    "Easy integration into your development workflow",
];

/// Tile names for the features page language grid.
pub const LANGUAGE_GRID: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "Java",
    "C/C++",
    "Go",
    "Rust",
    "PHP",
    "Ruby",
    "Swift",
    "Kotlin",
    "Dart",
    "HTML/CSS",
    "SQL",
    "Shell",
    "And 15+ more",
];

pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        title: "Code Reviews",
        description: "Get comprehensive insights before reviewing pull requests. Identify potential \
            issues and understand code changes better.",
        accent: "cyan",
    },
    UseCase {
        title: "Onboarding",
        description: "Help new team members understand the codebase quickly with detailed reports and \
            AI-powered explanations.",
        accent: "purple",
    },
    UseCase {
        title: "Maintenance",
        description: "Track code quality over time, identify technical debt, and prioritize refactoring \
            efforts effectively.",
        accent: "pink",
    },
];

// ---------------------------------------------------------------------------
// Language reference
// ---------------------------------------------------------------------------

pub struct Language {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub evaluation: &'static str,
}

pub struct LanguageCategory {
    pub name: &'static str,
    pub icon: &'static str,
    /// Accent used for the category badge
    pub accent: &'static str,
    pub languages: &'static [Language],
}

pub const LANGUAGE_CATEGORIES: &[LanguageCategory] = &[
    LanguageCategory {
        name: "Programming Languages",
        icon: ICON_SQUARES_FOUR,
        accent: "cyan",
        languages: &[
            Language {
                name: "Python",
                extensions: &[".py"],
                evaluation: "Full AST analysis with function, class, and import detection",
            },
            Language {
                name: "JavaScript",
                extensions: &[".js"],
                evaluation: "ES6+ syntax analysis, module detection, and complexity metrics",
            },
            Language {
                name: "TypeScript",
                extensions: &[".ts", ".tsx"],
                evaluation: "Type analysis, interface detection, and decorator support",
            },
            Language {
                name: "Java",
                extensions: &[".java"],
                evaluation: "Class hierarchy analysis, package structure, and OOP patterns",
            },
            Language {
                name: "C/C++",
                extensions: &[".c", ".cpp"],
                evaluation: "Header analysis, memory management patterns, and pointer usage",
            },
            Language {
                name: "Go",
                extensions: &[".go"],
                evaluation: "Package analysis, goroutine detection, and interface patterns",
            },
            Language {
                name: "Rust",
                extensions: &[".rs"],
                evaluation: "Ownership analysis, trait detection, and lifetime patterns",
            },
            Language {
                name: "PHP",
                extensions: &[".php"],
                evaluation: "Class analysis, namespace detection, and framework patterns",
            },
            Language {
                name: "Ruby",
                extensions: &[".rb"],
                evaluation: "Module analysis, metaprogramming detection, and DSL patterns",
            },
            Language {
                name: "Swift",
                extensions: &[".swift"],
                evaluation: "Protocol analysis, optional handling, and SwiftUI patterns",
            },
            Language {
                name: "Kotlin",
                extensions: &[".kt"],
                evaluation: "Coroutine detection, extension function analysis, and null safety",
            },
            Language {
                name: "Dart",
                extensions: &[".dart"],
                evaluation: "Widget analysis, async patterns, and Flutter-specific metrics",
            },
        ],
    },
    LanguageCategory {
        name: "Web Technologies",
        icon: ICON_GRAPH,
        accent: "purple",
        languages: &[
            Language {
                name: "HTML",
                extensions: &[".html"],
                evaluation: "DOM structure analysis, semantic HTML detection, and accessibility checks",
            },
            Language {
                name: "CSS/SCSS",
                extensions: &[".css", ".scss"],
                evaluation: "Selector complexity, specificity analysis, and responsive design patterns",
            },
            Language {
                name: "JSX/TSX",
                extensions: &[".jsx", ".tsx"],
                evaluation: "Component structure, props analysis, and React patterns",
            },
        ],
    },
    LanguageCategory {
        name: "Data & Configuration",
        icon: ICON_FOLDER,
        accent: "pink",
        languages: &[
            Language {
                name: "JSON",
                extensions: &[".json"],
                evaluation: "Structure validation, nesting depth, and schema compliance",
            },
            Language {
                name: "YAML",
                extensions: &[".yaml", ".yml"],
                evaluation: "Configuration analysis, indentation validation, and key patterns",
            },
            Language {
                name: "XML",
                extensions: &[".xml"],
                evaluation: "Schema validation, namespace analysis, and hierarchy depth",
            },
            Language {
                name: "Markdown",
                extensions: &[".md"],
                evaluation: "Document structure, heading hierarchy, and link validation",
            },
            Language {
                name: "Text Files",
                extensions: &[".txt"],
                evaluation: "Plain text analysis, line counting, and basic structure detection",
            },
        ],
    },
    LanguageCategory {
        name: "Scripts & Shell",
        icon: ICON_TERMINAL,
        accent: "green",
        languages: &[
            Language {
                name: "Bash/Shell",
                extensions: &[".sh", ".bash"],
                evaluation: "Command analysis, pipe usage, and script complexity",
            },
            Language {
                name: "SQL",
                extensions: &[".sql"],
                evaluation: "Query complexity, join patterns, and optimization opportunities",
            },
        ],
    },
];

/// (label, explanation) pairs under "How Analysis Works".
pub const ANALYSIS_STAGES: &[(&str, &str)] = &[
    ("Static Analysis", "Parses code structure without execution"),
    ("Metrics Collection", "LOC, complexity, dependencies, and patterns"),
    ("AI Enhancement", "Contextual explanations and improvement suggestions"),
    ("Report Generation", "Beautiful Markdown output with all findings"),
];

/// Every distinct extension listed in the language reference.
pub fn all_extensions() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for ext in LANGUAGE_CATEGORIES
        .iter()
        .flat_map(|category| category.languages)
        .flat_map(|language| language.extensions.iter().copied())
    {
        if !seen.contains(&ext) {
            seen.push(ext);
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Roadmap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Completed,
    InProgress,
    Planned,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Completed, Status::InProgress, Status::Planned];

    /// Badge text, e.g. "IN PROGRESS".
    pub fn badge(self) -> &'static str {
        match self {
            Status::Completed => "COMPLETED",
            Status::InProgress => "IN PROGRESS",
            Status::Planned => "PLANNED",
        }
    }

    /// Legend / preview text, e.g. "In Progress".
    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::InProgress => "In Progress",
            Status::Planned => "Planned",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Status::Completed => "status-completed",
            Status::InProgress => "status-in-progress",
            Status::Planned => "status-planned",
        }
    }
}

pub struct RoadmapItem {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct Quarter {
    pub label: &'static str,
    pub status: Status,
    pub icon: &'static str,
    pub items: &'static [RoadmapItem],
}

pub const ROADMAP: &[Quarter] = &[
    Quarter {
        label: "Q1 2025",
        status: Status::Completed,
        icon: ICON_CHECK,
        items: &[RoadmapItem {
            title: ".insightignore Support",
            description: "Exclude files and directories from analysis using gitignore-style patterns. \
                Perfect for ignoring build artifacts, dependencies, and generated code.",
            features: &[
                "Gitignore-compatible syntax",
                "Pattern matching for files and directories",
                "Default exclusions for common patterns",
                "Custom ignore rules per project",
            ],
        }],
    },
    Quarter {
        label: "Q2 2025",
        status: Status::InProgress,
        icon: ICON_LIGHTNING,
        items: &[
            RoadmapItem {
                title: "HTML & PDF Export",
                description: "Export your analysis reports in multiple formats for better sharing and \
                    presentation. Create beautiful, interactive HTML reports or professional PDF documents.",
                features: &[
                    "Interactive HTML reports with charts",
                    "Professional PDF generation",
                    "Custom themes and branding",
                    "Embedded code syntax highlighting",
                    "Responsive design for mobile viewing",
                ],
            },
            RoadmapItem {
                title: "Enhanced Metrics Dashboard",
                description: "Visual representation of code metrics with charts and graphs directly in \
                    the reports.",
                features: &[
                    "Complexity trend charts",
                    "Code quality heatmaps",
                    "Dependency graphs",
                    "Historical comparison views",
                ],
            },
        ],
    },
    Quarter {
        label: "Q3 2025",
        status: Status::Planned,
        icon: ICON_ROBOT,
        items: &[
            RoadmapItem {
                title: "Local AI Engines",
                description: "Run AI analysis completely offline using local language models. No API \
                    keys required, full privacy guaranteed.",
                features: &[
                    "Support for Ollama and LM Studio",
                    "Multiple model options (CodeLlama, Mistral, etc.)",
                    "GPU acceleration support",
                    "Offline operation",
                    "Customizable model parameters",
                ],
            },
            RoadmapItem {
                title: "Code Quality Scoring",
                description: "Comprehensive quality scoring system based on industry best practices and \
                    standards.",
                features: &[
                    "Overall quality score (0-100)",
                    "Category-specific scores",
                    "Comparison with industry benchmarks",
                    "Actionable improvement suggestions",
                ],
            },
        ],
    },
    Quarter {
        label: "Q4 2025",
        status: Status::Planned,
        icon: ICON_GRAPH,
        items: &[
            RoadmapItem {
                title: "Interactive Dashboard",
                description: "Web-based dashboard for exploring analysis results with interactive \
                    visualizations and drill-down capabilities.",
                features: &[
                    "Real-time analysis updates",
                    "Interactive code exploration",
                    "Customizable widgets and views",
                    "Team collaboration features",
                    "Historical trend analysis",
                    "Export and sharing capabilities",
                ],
            },
            RoadmapItem {
                title: "Multi-Repository Analysis",
                description: "Analyze multiple repositories simultaneously and compare metrics across \
                    projects.",
                features: &[
                    "Batch analysis of multiple repos",
                    "Cross-project comparisons",
                    "Unified reporting",
                    "Organization-wide insights",
                ],
            },
        ],
    },
    Quarter {
        label: "Q1 2026",
        status: Status::Planned,
        icon: ICON_DOWNLOAD,
        items: &[
            RoadmapItem {
                title: "Cloud Sync & Collaboration",
                description: "Store and share analysis reports in the cloud. Collaborate with your team \
                    on code insights and track changes over time.",
                features: &[
                    "Cloud storage for reports",
                    "Team workspaces",
                    "Real-time collaboration",
                    "Version history tracking",
                    "Commenting and annotations",
                    "Access control and permissions",
                ],
            },
            RoadmapItem {
                title: "CI/CD Integrations",
                description: "Pre-built integrations for popular CI/CD platforms.",
                features: &[
                    "GitHub Actions integration",
                    "GitLab CI/CD support",
                    "Jenkins plugin",
                    "CircleCI orb",
                    "Automated quality gates",
                ],
            },
        ],
    },
    Quarter {
        label: "Q2 2026",
        status: Status::Planned,
        icon: ICON_TERMINAL,
        items: &[
            RoadmapItem {
                title: "VSCode Extension",
                description: "Analyze your code directly from Visual Studio Code. Get instant insights \
                    without leaving your editor.",
                features: &[
                    "Inline code analysis",
                    "Quick actions and refactoring suggestions",
                    "Real-time quality indicators",
                    "Integration with VSCode problems panel",
                    "Custom keyboard shortcuts",
                    "Configurable analysis triggers",
                ],
            },
            RoadmapItem {
                title: "IDE Plugins",
                description: "Extend support to other popular IDEs.",
                features: &[
                    "IntelliJ IDEA plugin",
                    "PyCharm integration",
                    "Sublime Text package",
                    "Vim/Neovim plugin",
                ],
            },
        ],
    },
];

pub const FUTURE_VISION: &[Highlight] = &[
    Highlight {
        icon: ICON_WARNING_CIRCLE,
        title: "Security Analysis",
        description: "Advanced security vulnerability detection and OWASP compliance checking",
    },
    Highlight {
        icon: ICON_LIGHTNING,
        title: "Performance Insights",
        description: "Identify performance bottlenecks and optimization opportunities",
    },
    Highlight {
        icon: ICON_SQUARES_FOUR,
        title: "Custom Themes",
        description: "Fully customizable report themes and branding options",
    },
];

/// One line of the home page "What's Coming Next" strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upcoming {
    pub title: &'static str,
    pub status: Status,
    pub quarter: &'static str,
}

/// Headline item of each unfinished quarter, in timeline order.
pub fn roadmap_preview(limit: usize) -> Vec<Upcoming> {
    ROADMAP
        .iter()
        .filter(|quarter| quarter.status != Status::Completed)
        .filter_map(|quarter| {
            quarter.items.first().map(|item| Upcoming {
                title: item.title,
                status: quarter.status,
                quarter: quarter.label,
            })
        })
        .take(limit)
        .collect()
}

// ---------------------------------------------------------------------------
// Implementation guide
// ---------------------------------------------------------------------------

pub const PREREQUISITES: &[&str] = &[
    "Python 3.8 or higher",
    "pip (Python package manager)",
    "Git (for cloning repositories)",
];

/// A copyable command with a heading. `key` doubles as the copy key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub command: String,
}

pub fn usage_examples(binary: &str) -> Vec<Example> {
    let example = |key, title, description, args: &str| Example {
        key,
        title,
        description,
        command: format!("{binary} {args}"),
    };
    vec![
        example("basic", "Basic Analysis", "Analyze the current directory", "."),
        example(
            "specific",
            "Analyze Specific Directory",
            "Analyze a specific project folder",
            "/path/to/your/project",
        ),
        example(
            "output",
            "Custom Output File",
            "Specify a custom output filename",
            ". --output my-report.md",
        ),
        example(
            "exclude",
            "Exclude Files",
            "Exclude specific files or patterns",
            r#". --exclude "*.test.js" "node_modules/*""#,
        ),
        example("verbose", "Verbose Mode", "Enable detailed logging", ". --verbose"),
        example("help", "Help Command", "View all available options", "--help"),
    ]
}

/// Titled snippet shown in a read-only terminal block.
pub struct Snippet {
    pub title: &'static str,
    pub description: &'static str,
    pub body: String,
}

pub fn advanced_configuration(package: &str, binary: &str) -> Vec<Snippet> {
    vec![
        Snippet {
            title: ".insightignore File",
            description: "Create a .insightignore file in your project root to exclude files and \
                directories from analysis. Uses the same syntax as .gitignore.",
            body: "# .insightignore example\nnode_modules/\n*.test.js\ndist/\nbuild/\n.env\n*.log"
                .to_string(),
        },
        Snippet {
            title: "Environment Variables",
            description: "Configure Insight CLI using environment variables for API keys and settings.",
            body: "# Set Google API Key\nexport GOOGLE_API_KEY=\"your-api-key-here\"\n\n\
                   # For Windows\nset GOOGLE_API_KEY=your-api-key-here"
                .to_string(),
        },
        Snippet {
            title: "CI/CD Integration",
            description: "Integrate Insight CLI into your continuous integration pipeline.",
            body: format!(
                "# GitHub Actions example\n\
                 - name: Run Insight Analysis\n  run: |\n    pip install {package}\n    \
                 {binary} . --output analysis.md\n\n\
                 - name: Upload Report\n  uses: actions/upload-artifact@v2\n  with:\n    \
                 name: insight-report\n    path: analysis.md"
            ),
        },
    ]
}

pub struct Fix {
    pub problem: &'static str,
    pub hint: &'static str,
    pub command: String,
}

pub fn troubleshooting(package: &str) -> Vec<Fix> {
    vec![
        Fix {
            problem: "Command not found",
            hint: "If you get a \"command not found\" error, ensure pip's bin directory is in your PATH:",
            command: r#"export PATH="$HOME/.local/bin:$PATH""#.to_string(),
        },
        Fix {
            problem: "Permission denied",
            hint: "If you encounter permission errors, try installing with the --user flag:",
            command: format!("pip install --user {package}"),
        },
        Fix {
            problem: "API key issues",
            hint: "If AI features aren't working, verify your API key is set correctly by running:",
            command: "echo $GOOGLE_API_KEY".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_language_has_extensions() {
        for category in LANGUAGE_CATEGORIES {
            assert!(!category.languages.is_empty(), "{} is empty", category.name);
            for language in category.languages {
                assert!(!language.extensions.is_empty(), "{}", language.name);
                assert!(
                    language.extensions.iter().all(|ext| ext.starts_with('.')),
                    "{}",
                    language.name
                );
            }
        }
    }

    #[test]
    fn extensions_are_deduplicated() {
        let all = all_extensions();
        // .tsx appears under TypeScript and JSX/TSX
        assert_eq!(all.iter().filter(|ext| **ext == ".tsx").count(), 1);
        assert!(all.contains(&".py"));
        assert!(all.contains(&".sql"));
    }

    #[test]
    fn roadmap_starts_with_the_shipped_quarter() {
        assert_eq!(ROADMAP[0].status, Status::Completed);
        assert!(ROADMAP.iter().all(|quarter| !quarter.items.is_empty()));
    }

    #[test]
    fn preview_lists_next_three_headlines() {
        let preview = roadmap_preview(3);
        let titles: Vec<_> = preview.iter().map(|item| item.title).collect();
        assert_eq!(
            titles,
            vec!["HTML & PDF Export", "Local AI Engines", "Interactive Dashboard"]
        );
        assert_eq!(preview[0].status, Status::InProgress);
        assert_eq!(preview[0].quarter, "Q2 2025");
    }

    #[test]
    fn status_badges() {
        assert_eq!(Status::InProgress.badge(), "IN PROGRESS");
        assert_eq!(Status::Planned.label(), "Planned");
        assert_eq!(Status::Completed.css_class(), "status-completed");
    }

    #[test]
    fn usage_examples_follow_the_binary_name() {
        let examples = usage_examples("insight");
        assert_eq!(examples.len(), 6);
        assert_eq!(examples[0].command, "insight .");
        assert_eq!(examples[5].command, "insight --help");
        let keys: Vec<_> = examples.iter().map(|e| e.key).collect();
        let mut unique = keys.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn ci_snippet_installs_the_configured_package() {
        let snippets = advanced_configuration("insight-cli-sarang", "insight-cli-sarang");
        let ci = &snippets[2];
        assert!(ci.body.contains("pip install insight-cli-sarang"));
        assert!(ci.body.contains("insight-cli-sarang . --output analysis.md"));
    }

    #[test]
    fn troubleshooting_uses_user_install() {
        let fixes = troubleshooting("insight-cli-sarang");
        assert_eq!(fixes[1].command, "pip install --user insight-cli-sarang");
    }
}
