/// Static description and weight for one analyzer check.
#[derive(Debug, Clone, Copy)]
pub struct Guideline {
    pub key: &'static str,
    /// camelCase category used in the percentages mapping.
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub weight: u32,
    pub guide: &'static str,
}

pub const GUIDELINES: &[Guideline] = &[
    Guideline {
        key: "title",
        category: "title",
        name: "Page Title",
        description: "The title should be 30-60 characters long and descriptive",
        weight: 15,
        guide: "The title is crucial for SEO. It should include the main keywords and be attractive to users.",
    },
    Guideline {
        key: "meta_description",
        category: "metaDescription",
        name: "Meta Description",
        description: "Should be 150-160 characters long and relevant",
        weight: 10,
        guide: "The meta description appears in search results and should encourage the click.",
    },
    Guideline {
        key: "h1_tag",
        category: "h1Tag",
        name: "H1 Tag",
        description: "There should be exactly one H1 tag per page",
        weight: 12,
        guide: "The H1 should contain the main keyword and describe the content of the page.",
    },
    Guideline {
        key: "heading_structure",
        category: "headingStructure",
        name: "Heading Structure",
        description: "Correct hierarchical use of H1, H2, H3 and so on",
        weight: 8,
        guide: "Headings organize the content and help search engines understand its structure.",
    },
    Guideline {
        key: "images_alt",
        category: "imagesAlt",
        name: "Image Alt Text",
        description: "Every image should carry a descriptive alt attribute",
        weight: 8,
        guide: "Alt text improves accessibility and helps search engines understand images.",
    },
    Guideline {
        key: "internal_links",
        category: "internalLinks",
        name: "Internal Links",
        description: "The page should link to other pages of the same site",
        weight: 10,
        guide: "Internal links spread page authority and improve navigation.",
    },
    Guideline {
        key: "external_links",
        category: "externalLinks",
        name: "External Links",
        description: "Links to quality external sites",
        weight: 5,
        guide: "Links to trustworthy sources can improve the credibility of the content.",
    },
    Guideline {
        key: "https_ssl",
        category: "httpsSsl",
        name: "SSL Certificate (HTTPS)",
        description: "The site should be served over HTTPS",
        weight: 10,
        guide: "HTTPS is a ranking factor and improves user security and trust.",
    },
    Guideline {
        key: "mobile_viewport",
        category: "mobileViewport",
        name: "Mobile Optimization",
        description: "Viewport meta tag configured correctly",
        weight: 12,
        guide: "Mobile optimization is essential since search engines index mobile-first.",
    },
    Guideline {
        key: "page_speed",
        category: "pageSpeed",
        name: "Load Speed",
        description: "Server response time",
        weight: 10,
        guide: "Load speed affects user experience and search ranking.",
    },
];

pub fn lookup(key: &str) -> Option<&'static Guideline> {
    GUIDELINES.iter().find(|g| g.key == key)
}
