//! Curated technology catalog
//!
//! A fixed table mapping recognized technologies to display metadata (name,
//! Simple Icons slug, brand color) and the aliases used for matching. The
//! catalog is immutable, process-wide configuration; declaration order is the
//! display order of detected technologies.

use serde::Serialize;

/// A catalog entry for one recognized technology
///
/// Serializes without its aliases; the HTTP response carries only the display
/// metadata the UI needs to render a badge.
#[derive(Debug, Serialize)]
pub struct Technology {
    /// Internal identifier, e.g. "react"
    pub id: &'static str,

    /// Human-readable name, e.g. "React"
    pub name: &'static str,

    /// Simple Icons slug, e.g. "nextdotjs"
    pub slug: &'static str,

    /// Official brand color (hex)
    pub color: &'static str,

    /// Alternative names or related package names, lowercase; matching only
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

/// The technology catalog, in display order
pub static TECHNOLOGIES: &[Technology] = &[
    Technology {
        id: "javascript",
        name: "JavaScript",
        slug: "javascript",
        color: "#F7DF1E",
        aliases: &["js"],
    },
    Technology {
        id: "typescript",
        name: "TypeScript",
        slug: "typescript",
        color: "#3178C6",
        aliases: &["ts"],
    },
    Technology {
        id: "nodejs",
        name: "Node.js",
        slug: "nodedotjs",
        color: "#339933",
        aliases: &["node", "node.js"],
    },
    Technology {
        id: "react",
        name: "React",
        slug: "react",
        color: "#61DAFB",
        aliases: &["react-dom"],
    },
    Technology {
        id: "nextjs",
        name: "Next.js",
        slug: "nextdotjs",
        color: "#000000",
        aliases: &["next", "next.js"],
    },
    Technology {
        id: "express",
        name: "Express",
        slug: "express",
        color: "#000000",
        aliases: &[],
    },
    Technology {
        id: "bootstrap",
        name: "Bootstrap",
        slug: "bootstrap",
        color: "#7952B3",
        aliases: &[],
    },
    Technology {
        id: "tailwindcss",
        name: "Tailwind CSS",
        slug: "tailwindcss",
        color: "#06B6D4",
        aliases: &[],
    },
    Technology {
        id: "python",
        name: "Python",
        slug: "python",
        color: "#3776AB",
        aliases: &[],
    },
    Technology {
        id: "django",
        name: "Django",
        slug: "django",
        color: "#092E20",
        aliases: &[],
    },
    Technology {
        id: "flask",
        name: "Flask",
        slug: "flask",
        color: "#000000",
        aliases: &[],
    },
    Technology {
        id: "fastapi",
        name: "FastAPI",
        slug: "fastapi",
        color: "#009688",
        aliases: &[],
    },
    Technology {
        id: "go",
        name: "Go",
        slug: "go",
        color: "#00ADD8",
        aliases: &["golang"],
    },
    Technology {
        id: "java",
        name: "Java",
        slug: "java",
        color: "#007396",
        aliases: &[],
    },
    Technology {
        id: "spring",
        name: "Spring",
        slug: "spring",
        color: "#6DB33F",
        aliases: &["spring-boot", "spring boot"],
    },
    Technology {
        id: "mysql",
        name: "MySQL",
        slug: "mysql",
        color: "#4479A1",
        aliases: &[],
    },
    Technology {
        id: "postgresql",
        name: "PostgreSQL",
        slug: "postgresql",
        color: "#4169E1",
        aliases: &["postgres"],
    },
    Technology {
        id: "mongodb",
        name: "MongoDB",
        slug: "mongodb",
        color: "#47A248",
        aliases: &[],
    },
    Technology {
        id: "redis",
        name: "Redis",
        slug: "redis",
        color: "#DC382D",
        aliases: &[],
    },
];
