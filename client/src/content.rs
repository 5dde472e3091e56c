//! Static page content.
//!
//! Everything the page shows lives here so components only deal with layout
//! and behavior.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub photo: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Zohaib Ali",
    role: "Full-Stack Developer",
    tagline: "I build fast, accessible websites and the services behind them.",
    about: "I enjoy turning rough ideas into polished products, from the first sketch to production.",
    photo: "profile.jpg",
    email: "iamzohaibali@gmail.com",
    phone: "+923259938497",
    location: "Pakistan",
};

/// Navigation entries as `(section id, label)`, in page order.
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("services", "Services"),
    ("contact", "Contact"),
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        icon: "fas fa-code",
        skills: &["HTML5", "CSS3", "JavaScript", "React", "Leptos"],
    },
    SkillCategory {
        title: "Backend",
        icon: "fas fa-server",
        skills: &["Rust", "Node.js", "Axum", "REST APIs"],
    },
    SkillCategory {
        title: "Tools",
        icon: "fas fa-tools",
        skills: &["Git", "Docker", "Figma", "Linux"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Storefront",
        summary: "Responsive e-commerce front end with cart and checkout flows.",
        image: "project1.jpg",
        tags: &["HTML", "CSS", "JavaScript"],
        link: "#",
    },
    Project {
        title: "Task Board",
        summary: "Kanban board with drag-and-drop columns and local persistence.",
        image: "project2.jpg",
        tags: &["React", "LocalStorage"],
        link: "#",
    },
    Project {
        title: "Weather Now",
        summary: "City forecasts from a public weather API with unit switching.",
        image: "project3.jpg",
        tags: &["JavaScript", "API"],
        link: "#",
    },
    Project {
        title: "Link Shortener",
        summary: "Small web service that shortens and tracks links.",
        image: "project4.jpg",
        tags: &["Rust", "Axum"],
        link: "#",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        icon: "fas fa-laptop-code",
        summary: "Custom websites built to load fast and work on every device.",
    },
    Service {
        title: "UI Implementation",
        icon: "fas fa-pencil-ruler",
        summary: "Pixel-accurate pages from your Figma or Sketch designs.",
    },
    Service {
        title: "API Integration",
        icon: "fas fa-plug",
        summary: "Connecting your site to payment, mail, and data services.",
    },
];
