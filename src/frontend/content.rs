//! Static page copy.

pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_INITIALS: &str = "AM";
pub const HERO_BLURB: &str =
    "I build fast, accessible web applications and enjoy turning rough ideas into polished products.";

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub count: i64,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Projects Completed", count: 32 },
    Stat { label: "Happy Clients", count: 18 },
    Stat { label: "Years Experience", count: 5 },
];

#[derive(Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub percent: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", icon: "fab fa-js", percent: 90 },
    Skill { name: "React", icon: "fab fa-react", percent: 85 },
    Skill { name: "Node.js", icon: "fab fa-node-js", percent: 80 },
    Skill { name: "Python", icon: "fab fa-python", percent: 75 },
    Skill { name: "UI/UX Design", icon: "fas fa-pencil-ruler", percent: 70 },
    Skill { name: "Databases", icon: "fas fa-database", percent: 78 },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub source_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Storefront",
        description: "Headless e-commerce front end with cart, checkout and order tracking.",
        image: "/images/projects/storefront.jpg",
        tags: &["React", "Node.js", "Stripe"],
        demo_url: "https://example.com/storefront",
        source_url: "https://github.com/example/storefront",
    },
    Project {
        title: "Taskboard",
        description: "Real-time kanban board with drag and drop and team presence.",
        image: "/images/projects/taskboard.jpg",
        tags: &["TypeScript", "WebSockets", "PostgreSQL"],
        demo_url: "https://example.com/taskboard",
        source_url: "https://github.com/example/taskboard",
    },
    Project {
        title: "Weatherly",
        description: "Mobile-first forecast app with offline caching.",
        image: "/images/projects/weatherly.jpg",
        tags: &["PWA", "Service Workers"],
        demo_url: "https://example.com/weatherly",
        source_url: "https://github.com/example/weatherly",
    },
];

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Delivered ahead of schedule and the attention to detail showed everywhere.",
        author: "Priya Shah",
        role: "Product Manager",
        avatar: "/images/testimonials/priya.jpg",
    },
    Testimonial {
        quote: "Clear communication from kickoff to launch. Our conversion rate went up.",
        author: "Daniel Ortiz",
        role: "Founder",
        avatar: "/images/testimonials/daniel.jpg",
    },
    Testimonial {
        quote: "A rare mix of design sense and solid engineering.",
        author: "Mei Chen",
        role: "Design Lead",
        avatar: "/images/testimonials/mei.jpg",
    },
];

/// Icon class, heading, value.
pub const CONTACT_DETAILS: &[(&str, &str, &str)] = &[
    ("fas fa-envelope", "Email", "hello@example.com"),
    ("fas fa-map-marker-alt", "Location", "Remote"),
];

pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub image: &'static str,
}

pub const CERTIFICATE: Certificate = Certificate {
    title: "Professional Web Developer Certificate",
    issuer: "Issued 2024",
    image: "/images/certificate.jpg",
};
