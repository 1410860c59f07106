use chrono::{DateTime, Datelike};

pub const OWNER: &str = "Nikola Stanic";
pub const ROLE: &str = "Frontend Developer";
pub const LOCATION: &str = "St. Pölten, Austria";
pub const EMAIL: &str = "nikola.stanic@example.com";
pub const PHONE: &str = "+43 123 456 789";
pub const RESUME_PATH: &str = "/Lebenslauf_Stanic_Nikola.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Resume.pdf";

pub const HERO_COMMAND: &str = "npm run dev";
pub const HERO_COMMAND_CHAR_MS: u64 = 100;
pub const HERO_SERVER_LINE: &str = "✓ Server running at http://localhost:5173";
pub const HERO_GREETINGS: [&str; 3] = [
    "Hello, Nikola here!",
    "Welcome to my portfolio!",
    "Let's build something awesome.",
];
pub const HERO_FIRST_LINE: &str = "> Hello, Nikola here!";
pub const HERO_RUN_LINES: [&str; 3] = [
    "> Running App.tsx...",
    "Hello, Nikola here!",
    "🚀 App compiled successfully",
];

pub const COUNT_UP_MS: u64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        value: 2,
        label: "Experiences",
    },
    Stat {
        value: 10,
        label: "Project done",
    },
    Stat {
        value: 10,
        label: "Happy Clients",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const INSTAGRAM: Link = Link {
    name: "Instagram",
    url: "https://www.instagram.com/nikola.stnc",
    icon: "extra-instagram",
};

pub const SOCIAL_LINKS: [Link; 3] = [
    Link {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/nikola-stanic-799139222/",
        icon: "devicon-linkedin-plain",
    },
    Link {
        name: "GitHub",
        url: "https://github.com/codebyniki",
        icon: "devicon-github-original",
    },
    INSTAGRAM,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub image: Option<&'static str>,
    pub alt: &'static str,
    pub url: Option<&'static str>,
}

impl Project {
    /// Cards without a screenshot render as "coming soon".
    pub fn is_placeholder(&self) -> bool {
        self.image.is_none()
    }
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Stanitec",
        image: Some("/STANITEC.png"),
        alt: "Stanitec",
        url: Some("https://stanitec.at"),
    },
    Project {
        title: "RKZ Design",
        image: Some("/RKZ.png"),
        alt: "RKZ Design",
        url: Some("https://rkz-design.gmbh"),
    },
    Project {
        title: "Toby Strix",
        image: Some("/TobyStrix.png"),
        alt: "Toby Strix",
        url: Some("https://tobystrix.com"),
    },
    Project {
        title: "Coming Soon",
        image: None,
        alt: "Project placeholder",
        url: None,
    },
];

pub const MORE_PROJECTS_URL: &str = "https://github.com/codebyniki";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [Skill],
    /// Single illustrated card spanning the whole row.
    pub banner: Option<&'static str>,
}

pub const SKILL_CATEGORIES: [SkillCategory; 7] = [
    SkillCategory {
        id: "backend",
        title: "BACKEND",
        items: &[
            Skill {
                name: "Java",
                icon: "/java.png",
            },
            Skill {
                name: "Spring",
                icon: "/spring.png",
            },
        ],
        banner: None,
    },
    SkillCategory {
        id: "mobile",
        title: "MOBILE",
        items: &[
            Skill {
                name: "Flutter",
                icon: "/flutter.png",
            },
            Skill {
                name: "Dart",
                icon: "/dart.png",
            },
        ],
        banner: None,
    },
    SkillCategory {
        id: "frontend",
        title: "FRONTEND",
        items: &[
            Skill {
                name: "React",
                icon: "/image-2.png",
            },
            Skill {
                name: "TypeScript",
                icon: "/image-3.png",
            },
        ],
        banner: None,
    },
    SkillCategory {
        id: "databases",
        title: "DATABASES",
        items: &[
            Skill {
                name: "PostgreSQL",
                icon: "/postgre.png",
            },
            Skill {
                name: "MS SQL Server",
                icon: "/image-4.png",
            },
            Skill {
                name: "MongoDB",
                icon: "/image-5.png",
            },
        ],
        banner: None,
    },
    SkillCategory {
        id: "webFundamentals",
        title: "WEB FUNDAMENTALS",
        items: &[
            Skill {
                name: "HTML",
                icon: "/image-6.png",
            },
            Skill {
                name: "CSS",
                icon: "/image-7.png",
            },
            Skill {
                name: "JavaScript",
                icon: "/javascript-logo-svgrepo-com-1.png",
            },
        ],
        banner: None,
    },
    SkillCategory {
        id: "toolsDesign",
        title: "TOOLS & DESIGN",
        items: &[
            Skill {
                name: "Git",
                icon: "/git-svgrepo-com-1.png",
            },
            Skill {
                name: "Figma",
                icon: "/figma-svgrepo-com-1.png",
            },
            Skill {
                name: "VS Code",
                icon: "/vs-code-svgrepo-com-1.png",
            },
        ],
        banner: None,
    },
    SkillCategory {
        id: "cleanCode",
        title: "CLEAN CODE",
        items: &[],
        banner: Some("/vecteezy_coding-3d-rendering-icon-illustration_28542587-1.png"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const RESUME_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Education",
        description: "HTL St. Pölten - Software Engineering",
        icon: "🎓",
    },
    Highlight {
        title: "Experience",
        description: "2+ years in Frontend Development",
        icon: "💼",
    },
    Highlight {
        title: "Projects",
        description: "10+ successful web applications",
        icon: "🏆",
    },
];

/// Year the site was built, for the footer copyright.
pub fn copyright_year() -> i32 {
    build_year(env!("BUILD_TIME")).unwrap_or(2025)
}

fn build_year(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2025-06-01T12:00:00+00:00"), Some(2025));
        assert_eq!(build_year("not a date"), None);
        assert!(copyright_year() >= 2025);
    }

    #[test]
    fn test_single_placeholder_last() {
        let placeholders = PROJECTS.iter().filter(|p| p.is_placeholder()).count();
        assert_eq!(placeholders, 1);
        assert!(PROJECTS[PROJECTS.len() - 1].is_placeholder());
        assert!(PROJECTS.iter().all(|p| p.is_placeholder() == p.url.is_none()));
    }

    #[test]
    fn test_skill_categories_have_content() {
        for category in SKILL_CATEGORIES.iter() {
            assert!(
                !category.items.is_empty() || category.banner.is_some(),
                "{} renders nothing",
                category.id
            );
        }
    }

    #[test]
    fn test_instagram_is_a_social_link() {
        assert_eq!(INSTAGRAM.name, "Instagram");
        assert!(INSTAGRAM.url.contains("instagram.com"));
        assert!(SOCIAL_LINKS.contains(&INSTAGRAM));
    }

    #[test]
    fn test_hero_first_greeting_matches_terminal() {
        assert!(HERO_FIRST_LINE.ends_with(HERO_GREETINGS[0]));
    }
}
