use std::fmt;

// literal page copy
//
// every page is a projection of the slices below; the counts are part of the observable
// behavior of the site, so they are pinned by the tests at the bottom of this file

// the record behind most repeated cards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub heading: &'static str,
    pub description: &'static str,
}

const fn item(heading: &'static str, description: &'static str) -> ContentItem {
    ContentItem {
        heading,
        description,
    }
}

// title and kicker shown at the top of a page section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

const fn heading(title: &'static str, subtitle: &'static str) -> Heading {
    Heading { title, subtitle }
}

// home
pub const HOME_WELCOME: &str = "Welcome to Sharma Interior";
pub const HOME_HEADLINE: &str = "Bespoke Interiors. Quality Craft. Timely Execution.";
pub const HOME_INTRO: &str = "Full-service interior studio offering consultation, custom furniture, in-house production and on-time project delivery.";
pub const HOME_BADGES: [&str; 3] = ["100% Trusted", "Own Production", "After-Sales Support"];
pub const CLIENT_RATING: &str = "4.9/5";

pub const HIGHLIGHTS_HEADING: Heading = heading("Why Families Trust Us", "Highlights");
pub const HIGHLIGHTS: [ContentItem; 3] = [
    item(
        "Sharma Interior & Decoration",
        "Transforming spaces into dream homes — design, production, and execution under one roof.",
    ),
    item(
        "100% Trusted Brand",
        "Timely delivery, transparent pricing, and after-sales service you can count on.",
    ),
    item(
        "Loved by Our Clients",
        "\"They delivered exactly what we imagined — and more.\" — A Happy Client",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedWork {
    pub image_label: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

const fn featured(image_label: &'static str) -> FeaturedWork {
    FeaturedWork {
        image_label,
        title: "Modern Living Room",
        caption: "Jaipur • 2025",
    }
}

pub const FEATURED_HEADING: Heading = heading("Featured Work", "Showcase");
pub const FEATURED_WORK: [FeaturedWork; 6] = [
    featured("Image 1"),
    featured("Image 2"),
    featured("Image 3"),
    featured("Image 4"),
    featured("Image 5"),
    featured("Image 6"),
];

pub const CONSULTATION_BANNER: ContentItem = item(
    "Let’s design your dream space",
    "Book a free consultation. Get designs, estimates, and timelines quickly.",
);

// company
pub const COMPANY_HEADING: Heading = heading("About Sharma Interior & Decoration", "Company");
pub const COMPANY_INTRO: &str = "We are a full-service interior design studio offering consultation, bespoke design, in-house production, and on-time execution with dedicated after-sales service.";
pub const COMPANY_SERVICES: [&str; 5] = [
    "Consultation",
    "Interior Design",
    "Production",
    "Execution",
    "After-Sales Service",
];

pub const WORKFLOW_HEADING: Heading = heading("Our Workflow", "Process");
pub const WORKFLOW_STEPS: [&str; 5] = [
    "Consultation",
    "Design",
    "Production",
    "Execution",
    "After Sales",
];

pub fn workflow_description(step: &str) -> String {
    format!(
        "Short description of how we handle {}.",
        step.to_lowercase()
    )
}

// custom design
pub const CUSTOM_HEADING: Heading = heading("Custom-Made Designs", "Personalized");
pub const CUSTOM_INTRO: &str = "Get furniture and finishes tailored to your space — handcrafted sofas, beds, wardrobes, tables, lighting and more. Enjoy perfect fit, materials of your choice, and a signature look.";
pub const FURNITURE_CATEGORIES: [&str; 6] = [
    "Sofa Set",
    "Bed + Side Tables",
    "Dining Set",
    "Wardrobe",
    "Study Table",
    "TV Unit",
];
pub const FURNITURE_FEATURES: [&str; 3] = [
    "Personalized dimensions",
    "Material & finish options",
    "Warranty & support",
];

// design build
pub const DESIGN_BUILD_HEADING: Heading = heading("Design & Build", "End-to-end");
pub const DESIGN_BUILD_STAGES: [ContentItem; 6] = [
    item(
        "Interior Design & Estimate",
        "Site visit, concept boards, layouts, and clear cost estimates.",
    ),
    item(
        "Drawings & Approvals",
        "Detailed drawings, 3D views, and approval rounds.",
    ),
    item(
        "In-house Production",
        "Own factory for quality control and faster timelines.",
    ),
    item(
        "Material Delivery",
        "Coordinated logistics to deliver on time.",
    ),
    item(
        "Execution on Site",
        "Skilled team ensures neat, safe installation.",
    ),
    item(
        "Project Handover",
        "Snag checks, cleaning, and final documentation.",
    ),
];

// products
pub const PRODUCTS_HEADING: Heading = heading("Products", "Explore");
pub const PRODUCT_CATEGORIES: [&str; 7] = [
    "Sofas & Armchairs",
    "Beds & Bedding Sets",
    "Chairs",
    "Tables & Side Tables",
    "Accessories",
    "Rugs",
    "Lighting",
];

// offers
pub const OFFERS_HEADING: Heading = heading("Offers & Packages", "Save more");
pub const OFFER_NOTE: &str = "Festive extra discount*";
pub const OFFERS: [ContentItem; 3] = [
    item(
        "Full Flat Package",
        "End-to-end design + execution with bundled pricing.",
    ),
    item(
        "3BHK Premium",
        "Custom furniture + modular kitchen + wardrobes.",
    ),
    item(
        "4BHK Elite",
        "Luxury finishes, lighting, décor and concierge support.",
    ),
];

// projects and gallery
pub const PROJECTS_HEADING: Heading = heading("Projects", "Case studies");
pub const PROJECTS: [ContentItem; 4] = [
    item(
        "2BHK Modern • Jaipur",
        "Delivered in 8 weeks • Budget friendly",
    ),
    item(
        "2BHK Modern • Jaipur",
        "Delivered in 8 weeks • Budget friendly",
    ),
    item(
        "2BHK Modern • Jaipur",
        "Delivered in 8 weeks • Budget friendly",
    ),
    item(
        "2BHK Modern • Jaipur",
        "Delivered in 8 weeks • Budget friendly",
    ),
];

pub const GALLERY_HEADING: Heading = heading("Gallery", "Photos & Videos");
pub const GALLERY_TILE_COUNT: usize = 12;

// contact
pub const CONTACT_HEADING: Heading = heading("Contact Us", "Let’s talk");
pub const CONTACT_INTRO: &str = "Have a project in mind? Send us a message or schedule a call. We typically respond within 24 hours.";

// faq
pub const FAQ_HEADING: Heading = heading("FAQs", "Good to know");
pub const FAQS: [ContentItem; 4] = [
    item(
        "How long does a project take?",
        "Typical 6–10 weeks depending on scope.",
    ),
    item(
        "Do you provide free consultation?",
        "Yes, first consultation is free.",
    ),
    item(
        "Do you work outside Jaipur?",
        "We serve major Indian cities; talk to us.",
    ),
    item("Warranty?", "Up to 5 years on select items."),
];

// careers and referrals
pub const CAREERS_HEADING: Heading = heading("Careers", "Join our team");
pub const CAREERS_INTRO: &str = "We’re always looking for talented designers, project managers, carpenters, and installers.";
pub const CAREER_PERKS: &[&str] = &["Competitive pay", "Growth & learning", "Friendly culture"];

pub const REFER_HEADING: Heading = heading("Refer a Friend", "Earn rewards");
pub const REFER_INTRO: &str =
    "Refer a friend and earn cashback when they confirm a project with us.";
pub const REFERRAL_PERKS: &[&str] = &[
    "Instant acknowledgement",
    "Reward after project confirmation",
    "Transparent terms & tracking",
];

// csr
pub const CSR_HEADING: Heading = heading("Corporate Social Responsibility", "Our promise");
const CSR_BLURB: &str = "We invest in programs that uplift communities and the environment.";
pub const CSR_PILLARS: [ContentItem; 4] = [
    item("Education & Skill Development", CSR_BLURB),
    item("Health & Wellness", CSR_BLURB),
    item("Environmental Sustainability", CSR_BLURB),
    item("Community Support", CSR_BLURB),
];

// annual return
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricValue {
    Count(u32),
    Text(&'static str),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: MetricValue,
}

pub const ANNUAL_RETURN_HEADING: Heading = heading("Annual Return", "Year in review");
pub const ANNUAL_METRICS: [Metric; 4] = [
    Metric {
        label: "Projects Completed",
        value: MetricValue::Count(120),
    },
    Metric {
        label: "Customer Satisfaction",
        value: MetricValue::Text("4.9/5"),
    },
    Metric {
        label: "Average Timeline",
        value: MetricValue::Text("8 weeks"),
    },
    Metric {
        label: "Cities Served",
        value: MetricValue::Count(7),
    },
];
pub const ANNUAL_REPORT_NOTE: &str = "Download detailed report (PDF) — coming soon.";

// sitemap and fallbacks
pub const SITEMAP_HEADING: Heading = heading("Sitemap", "Find us");
pub const NOT_FOUND_HEADING: Heading = heading("Page not found", "404");
pub const NOT_FOUND_MESSAGE: &str =
    "The page you are looking for does not exist or has moved.";
