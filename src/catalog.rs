//! Static Program & Course Catalog
//!
//! Read-only reference data supplied at startup. The enrollment state holds
//! `&'static` references into this table; nothing here is ever mutated.

use serde::Serialize;

/// A single purchasable course offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub fee: &'static str,
}

/// A top-level program grouping an ordered list of courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Program {
    pub id: &'static str,
    pub name: &'static str,
    pub courses: &'static [Course],
}

pub const PROGRAMS: &[Program] = &[
    Program {
        id: "study-abroad",
        name: "Study Abroad",
        courses: &[
            Course {
                id: "ms-cs-usa",
                name: "MS in Computer Science (USA)",
                description: "Comprehensive program for computer science masters in top US universities. Gain expertise in algorithms, software engineering, and cutting-edge technologies.",
                duration: "2 years",
                fee: "$50,000",
            },
            Course {
                id: "ms-data-science",
                name: "MS in Data Science",
                description: "Master data analysis, machine learning, and statistical modeling. Prepare for roles in data science and analytics.",
                duration: "2 years",
                fee: "$45,000",
            },
            Course {
                id: "mba-abroad",
                name: "MBA Abroad",
                description: "Global business education with international exposure. Develop leadership skills and business acumen for global careers.",
                duration: "2 years",
                fee: "$60,000",
            },
            Course {
                id: "ms-ai",
                name: "MS in Artificial Intelligence",
                description: "Advanced AI curriculum covering machine learning, neural networks, and AI applications in various industries.",
                duration: "2 years",
                fee: "$55,000",
            },
            Course {
                id: "ms-business-analytics",
                name: "MS in Business Analytics",
                description: "Learn to leverage data for business decisions. Focus on analytics tools, visualization, and strategic insights.",
                duration: "2 years",
                fee: "$48,000",
            },
        ],
    },
    Program {
        id: "career-launchpad",
        name: "Career Launchpad",
        courses: &[
            Course {
                id: "full-stack-dev",
                name: "Full Stack Web Development",
                description: "Become a full stack developer. Learn frontend and backend technologies, databases, and deployment.",
                duration: "6 months",
                fee: "$8,000",
            },
            Course {
                id: "data-analytics-bi",
                name: "Data Analytics & Business Intelligence",
                description: "Master data visualization, BI tools, and analytical techniques for business intelligence roles.",
                duration: "4 months",
                fee: "$6,000",
            },
            Course {
                id: "product-management",
                name: "Product Management",
                description: "Learn product strategy, roadmapping, and management. Prepare for PM roles in tech companies.",
                duration: "5 months",
                fee: "$7,000",
            },
            Course {
                id: "ui-ux-design",
                name: "UI/UX Design",
                description: "Design user-centered interfaces and experiences. Master design tools and user research methods.",
                duration: "4 months",
                fee: "$5,500",
            },
            Course {
                id: "digital-marketing",
                name: "Digital Marketing & Growth",
                description: "Comprehensive digital marketing course covering SEO, social media, PPC, and growth hacking.",
                duration: "3 months",
                fee: "$4,500",
            },
        ],
    },
    Program {
        id: "professional-courses",
        name: "Professional Courses",
        courses: &[
            Course {
                id: "python-pro",
                name: "Python for Professionals",
                description: "Advanced Python programming for professionals. Focus on automation, data processing, and professional applications.",
                duration: "2 months",
                fee: "$2,500",
            },
            Course {
                id: "excel-powerbi",
                name: "Advanced Excel & Power BI",
                description: "Master Excel advanced features and Power BI for data visualization and business intelligence.",
                duration: "1.5 months",
                fee: "$2,000",
            },
            Course {
                id: "sql-database",
                name: "SQL & Database Management",
                description: "Learn SQL querying, database design, and management. Essential for data roles.",
                duration: "2 months",
                fee: "$2,200",
            },
            Course {
                id: "ml-foundations",
                name: "Machine Learning Foundations",
                description: "Introduction to machine learning concepts, algorithms, and practical implementation.",
                duration: "3 months",
                fee: "$3,500",
            },
            Course {
                id: "cloud-computing",
                name: "Cloud Computing Basics",
                description: "Fundamentals of cloud computing, AWS/Azure basics, and cloud architecture.",
                duration: "2 months",
                fee: "$2,800",
            },
        ],
    },
];

/// Look up a program by id.
pub fn find_program(id: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.id == id)
}

/// Look up a course by id across all programs.
pub fn find_course(id: &str) -> Option<&'static Course> {
    PROGRAMS
        .iter()
        .flat_map(|p| p.courses.iter())
        .find(|c| c.id == id)
}

/// Display name for a program id, falling back to the raw id when the id is
/// not in the catalog (the confirmation screen shows whatever was captured).
pub fn program_name_or_id(id: &str) -> &str {
    find_program(id).map(|p| p.name).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(PROGRAMS.len(), 3);
        for program in PROGRAMS {
            assert_eq!(program.courses.len(), 5, "program {}", program.id);
        }
    }

    #[test]
    fn test_course_ids_unique() {
        let ids: Vec<_> = PROGRAMS
            .iter()
            .flat_map(|p| p.courses.iter().map(|c| c.id))
            .collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate course id {id}");
        }
    }

    #[test]
    fn test_find_program() {
        assert_eq!(find_program("study-abroad").unwrap().name, "Study Abroad");
        assert_eq!(
            find_program("career-launchpad").unwrap().name,
            "Career Launchpad"
        );
        assert!(find_program("nope").is_none());
    }

    #[test]
    fn test_find_course() {
        let course = find_course("full-stack-dev").unwrap();
        assert_eq!(course.name, "Full Stack Web Development");
        assert_eq!(course.duration, "6 months");
        assert_eq!(course.fee, "$8,000");
        assert!(find_course("nope").is_none());
    }

    #[test]
    fn test_program_name_fallback() {
        assert_eq!(program_name_or_id("professional-courses"), "Professional Courses");
        assert_eq!(program_name_or_id("unknown-id"), "unknown-id");
    }
}
