//! Static copy for the page sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Orange,
}

impl Accent {
    /// Tailwind classes are spelled out in full so the class scanner keeps them.
    pub fn label_class(self) -> &'static str {
        match self {
            Self::Blue => "text-blue-600 dark:text-blue-400",
            Self::Purple => "text-purple-600 dark:text-purple-400",
            Self::Green => "text-green-600 dark:text-green-400",
            Self::Orange => "text-orange-600 dark:text-orange-400",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Self::Blue => "from-blue-50 to-indigo-50",
            Self::Purple => "from-purple-50 to-pink-50",
            Self::Green => "from-green-50 to-teal-50",
            Self::Orange => "from-orange-50 to-amber-50",
        }
    }

    pub fn banner_class(self) -> &'static str {
        match self {
            Self::Blue => "from-blue-500 to-indigo-600",
            Self::Purple => "from-purple-500 to-pink-600",
            Self::Green => "from-green-500 to-teal-600",
            Self::Orange => "from-orange-400 to-orange-600",
        }
    }

    pub fn tag_class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 dark:bg-blue-900 text-blue-700 dark:text-blue-300",
            Self::Purple => "bg-purple-100 dark:bg-purple-900 text-purple-700 dark:text-purple-300",
            Self::Green => "bg-green-100 dark:bg-green-900 text-green-700 dark:text-green-300",
            Self::Orange => "bg-orange-100 dark:bg-orange-900 text-orange-700 dark:text-orange-300",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Blue => "from-blue-400 to-blue-600",
            Self::Purple => "from-purple-400 to-purple-600",
            Self::Green => "from-green-400 to-green-600",
            Self::Orange => "from-orange-400 to-orange-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub label: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub emoji: &'static str,
    pub tags: &'static [&'static str],
    pub accent: Accent,
    pub demo_url: &'static str,
    pub source_url: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        label: "WHAT I KNOW",
        title: "Sales Dashboard Analysis",
        summary: "Interactive dashboard analyzing sales trends, customer behavior, and revenue patterns using Python and Tableau.",
        emoji: "📊",
        tags: &["Python", "Tableau", "Excel"],
        accent: Accent::Blue,
        demo_url: "#",
        source_url: "#",
    },
    Project {
        label: "WHAT I LEARNED",
        title: "Customer Segmentation",
        summary: "Applied clustering algorithms and SQL queries to segment customers, improving targeted marketing strategies.",
        emoji: "🎯",
        tags: &["SQL", "Pandas", "Scikit-learn"],
        accent: Accent::Purple,
        demo_url: "#",
        source_url: "#",
    },
    Project {
        label: "ASPIRING TO BUILD",
        title: "Predictive Analytics Platform",
        summary: "Building a real-time predictive model for business forecasting using machine learning and cloud technologies.",
        emoji: "🚀",
        tags: &["Machine Learning", "Power BI", "Azure"],
        accent: Accent::Green,
        demo_url: "#",
        source_url: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningItem {
    pub title: &'static str,
    pub summary: &'static str,
    pub emoji: &'static str,
    pub accent: Accent,
}

pub const LEARNING: [LearningItem; 4] = [
    LearningItem {
        title: "Advanced SQL & Database Design",
        summary: "Mastering complex queries, optimization techniques, and database architecture for large-scale data analysis",
        emoji: "📚",
        accent: Accent::Blue,
    },
    LearningItem {
        title: "Power BI & Data Visualization",
        summary: "Creating interactive dashboards and reports that tell compelling data stories for business stakeholders",
        emoji: "🚀",
        accent: Accent::Purple,
    },
    LearningItem {
        title: "Statistical Analysis & R",
        summary: "Applying statistical methods and R programming for hypothesis testing and predictive modeling",
        emoji: "💡",
        accent: Accent::Green,
    },
    LearningItem {
        title: "Machine Learning Fundamentals",
        summary: "Exploring ML algorithms and techniques to enhance predictive analytics capabilities",
        emoji: "🎯",
        accent: Accent::Orange,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email Me",
        href: "mailto:jererchjancuran2@gmail.com",
        external: false,
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/jjcuran-code",
        external: true,
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/jerech-jan-curan-0049a23a7/",
        external: true,
    },
];

/// In-page anchors shown in the navigation bar.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#projects", "Projects"),
    ("#learning", "Learning"),
    ("#contact", "Contact"),
];

/// Background chart data in a 200x200 viewBox: (x, y) with y growing down.
pub const LINE_POINTS: [(u8, u8); 6] = [
    (20, 150),
    (50, 120),
    (80, 140),
    (110, 80),
    (140, 100),
    (170, 60),
];

pub const SCATTER_POINTS: [(u8, u8); 10] = [
    (30, 150),
    (60, 120),
    (45, 140),
    (90, 100),
    (75, 130),
    (120, 80),
    (105, 110),
    (150, 60),
    (135, 90),
    (165, 70),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_cover_each_stage() {
        let labels = PROJECTS.map(|p| p.label);
        assert_eq!(labels, ["WHAT I KNOW", "WHAT I LEARNED", "ASPIRING TO BUILD"]);
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_external_links_are_https() {
        for link in CONTACT_LINKS.iter().filter(|l| l.external) {
            assert!(link.href.starts_with("https://"), "{}", link.href);
        }
        assert!(CONTACT_LINKS[0].href.starts_with("mailto:"));
    }

    #[test]
    fn test_chart_points_fit_viewbox() {
        for (x, y) in LINE_POINTS.into_iter().chain(SCATTER_POINTS) {
            assert!(x < 200 && y < 200, "({x}, {y})");
        }
    }

    #[test]
    fn test_scatter_trends_upward() {
        let mut points = SCATTER_POINTS;
        points.sort();
        assert_eq!(points.len(), 10);
        // the leftmost half sits lower on screen than the rightmost half
        let low: u32 = points[..5].iter().map(|&(_, y)| y as u32).sum();
        let high: u32 = points[5..].iter().map(|&(_, y)| y as u32).sum();
        assert!(low > high);
    }

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|(href, _)| href.starts_with('#')));
    }
}
