//! Static blog content, keyed by URL slug.

use crate::blog::blocks::{ContentBlock, ImageSize};

/// A post body is either a plain text blob (split into paragraphs on blank
/// lines at render time) or a structured block sequence.
pub enum PostBody {
    Plain(&'static str),
    Blocks(fn() -> Vec<ContentBlock>),
}

pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub video_url: Option<&'static str>,
    pub images: &'static [&'static str],
    pub body: PostBody,
}

/// All posts, newest first. The listing page walks this in order and the
/// detail page looks entries up by slug.
pub fn all() -> &'static [BlogPost] {
    &POSTS
}

pub fn find(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

static POSTS: [BlogPost; 4] = [
    BlogPost {
        slug: "casqa-swppp-template-gold-standard",
        title: "Thoughts on the \"Gold Standard\" of SWPPP templates",
        excerpt: "A practical perspective on the CASQA CGP SWPPP template for QSDs and stormwater professionals",
        date: "2025",
        video_url: None,
        images: &[],
        body: PostBody::Plain(
            "The CASQA CGP SWPPP template is often called the gold standard of the industry, and for good reason: it is thorough, it tracks the Construction General Permit closely, and regulators know it on sight.\n\nBut thorough is not the same as usable. In practice the template asks writers to repeat the same project facts in a half dozen places, and keeping those copies consistent across revisions is where most of the review findings we see actually come from.\n\nStorm's own template started from the same permit requirements, but every fact lives in one place and flows into the narrative, the attachments, and the certification pages automatically. The gold standard taught us what a SWPPP must contain. Software should be what keeps it consistent.",
        ),
    },
    BlogPost {
        slug: "swppp-mapping-prototype",
        title: "Building the Future of SWPPP Mapping: A First Look at The New Prototype",
        excerpt: "I've been quietly working on something I've wanted for years—a modern, intuitive, actually-nice-to-use tool for creating SWPPP site maps.",
        date: "2025",
        video_url: None,
        images: &[
            "/MappingProto1.png",
            "/MappingProto2.png",
            "/MappingProto3.png",
            "/MappingProto4.png",
        ],
        body: PostBody::Blocks(mapping_prototype_blocks),
    },
    BlogPost {
        slug: "digital-transformation-stormwater-industry",
        title: "Digital Transformation in the Stormwater Industry",
        excerpt: "Stormwater Compliance Was Built on the Wrong Foundation — And It's Time We Fix It",
        date: "2025",
        video_url: Some("https://vimeo.com/1122303387"),
        images: &[],
        body: PostBody::Plain(
            "Stormwater Compliance Was Built on the Wrong Foundation — And It's Time We Fix It\n\nHere's a truth I've learned after spending years in the stormwater industry:\n\nOur entire stormwater compliance system was built on a foundation that no longer exists.\n\nAnd I don't mean the regulations — I mean the technology layer underneath them.\n\nThrough no fault of its own, the stormwater industry got swept up in the evolution of office culture and early computing. What started as a harmless metaphor — \"files,\" \"folders,\" \"desktops,\" \"documents\" — quietly dictated how environmental compliance would operate for decades.\n\nFor a long time, it didn't look like a problem. Regulations were simpler, documents were shorter, and version control wasn't the monster it is today. But as rules became more complex and as teams became more distributed, the gap between regulatory intent and the tools we were given became painfully clear.\n\nIn this post, I want to walk you through how we got here — and why we're standing on the edge of a necessary reinvention.",
        ),
    },
    BlogPost {
        slug: "ai-slop-armageddon",
        title: "AI Slop Armageddon: Ensuring Quality and Accuracy in the Age of Armageddon",
        excerpt: "AI has never moved faster than it is right now. Every month brings a breakthrough, a new model, or a new capability that seemed impossible just a year ago.",
        date: "2025",
        video_url: Some("https://vimeo.com/1122303387"),
        images: &[],
        body: PostBody::Plain(
            "AI has never moved faster than it is right now. Every month brings a breakthrough, a new model, or a new capability that seemed impossible just a year ago. Technology is improving exponentially, not linearly — and if you've been watching closely, you can feel the acceleration.\n\nI use AI constantly in my work. I rely on it for research, drafting, summarizing, coding, and even brainstorming. But that level of reliance comes with a responsibility: knowing where the cracks are, and recognizing when AI quietly injects errors, distortions, or oversimplifications into our workflows.\n\nIn my recent presentation, \"AI Slop Armageddon,\" I broke down five subtle ways AI quality can slip — and how to spot (and stop) them before they contaminate real work. Below is the full talk.",
        ),
    },
];

fn mapping_prototype_blocks() -> Vec<ContentBlock> {
    vec![
        ContentBlock::paragraph("Storm has been quietly working on something I've wanted for years—a modern, intuitive, actually-nice-to-use tool for creating SWPPP site maps. Not something built in GIS, and not something as overwhelming as CAD. I'm talking about a purpose-built mapping interface designed specifically for stormwater BMPs and SWPPP plans."),
        ContentBlock::paragraph("Today, I get to share with you a behind-the-scenes look at a prototype mapping tool and tell you why I think it will change how fast SWPPPs can be prepared."),
        ContentBlock::heading("Why A New Mapping Tool is Needed"),
        ContentBlock::paragraph("If you've been in the stormwater business a while, you know the pain:"),
        ContentBlock::list(&[
            "Every SWPPP map looks different.",
            "BMP symbols are inconsistent across consultants.",
            "CAD softwares are cumbersome, way overkill, and just too much for most stormwater consultants.",
            "And Microsoft Word just… isn't cut out for the job.",
        ]),
        ContentBlock::paragraph("I kept asking myself: What would a purpose-built SWPPP mapping app look like if we started from scratch? A fast, modern, web-based tool that understands BMPs, layers, and take-offs, all out of the box."),
        ContentBlock::paragraph("So here we are."),
        ContentBlock::heading("The Vision: A Modern Web-Based CAD for BMPs"),
        ContentBlock::paragraph("The core idea is simple:"),
        ContentBlock::paragraph("Let users draw BMPs on a plan with the ease of a native drawing software, but with the structure and intelligence of CAD."),
        ContentBlock::paragraph("I won't bore you with the technical stuff, but the prototype involves the CAD features that most stormwater consultants actually need when creating a SWPP map: angles, measurements, offsets, snapping to endpoints and midpoints, and more. But it also includes robust drawing tools that will be familiar to anyone who's spent time in professional drawing platforms."),
        ContentBlock::image("/MappingProto1.png", "Storm Mapping Prototype Interface", ImageSize::Large),
        ContentBlock::heading("BMPs: More than Dashed Lines"),
        ContentBlock::paragraph("This is the really fun part."),
        ContentBlock::paragraph("One of the things I've always been annoyed with is how generic everything looks. A fiber roll is a yellow line. A silt fence is a dashed line. Nothing is recognizable at a glance."),
        ContentBlock::paragraph("So our BMP object styles are built to be recognizable:"),
        ContentBlock::list(&[
            "Fiber rolls: tan, rounded ends, subtle hatch texture that follows the path",
            "Silt fence: clean black line with a small repeating \"picket\" pattern",
            "Construction entrances: aggregate texture along the vector",
            "Inlets, check dams, basins: vector symbols with metadata baked in",
        ]),
        ContentBlock::image("/MappingProto4.png", "Erosion Controls Menu", ImageSize::Normal),
        ContentBlock::paragraph("These look like what civil engineers draw in CAD—but clean, modern, and web-ready."),
        ContentBlock::image("/MappingProto2.png", "SWPPP Map with BMPs", ImageSize::Normal),
        ContentBlock::heading("The Takeoff System (My Favorite Part)"),
        ContentBlock::paragraph("Because all BMPs are objects, not just drawings, the app automatically generates a materials list:"),
        ContentBlock::list(&[
            "Total linear feet of fiber roll",
            "Linear feet of silt fence",
            "Number of inlet protections",
            "Rock quantities for construction entrances",
            "Hydromulch square footage",
        ]),
        ContentBlock::paragraph("This has not been easy in the PDF/CAD hybrid world. But here, it's automatic."),
        ContentBlock::image("/MappingProto3.png", "Materials Takeoff Dashboard", ImageSize::Normal),
        ContentBlock::heading("What's Next?"),
        ContentBlock::paragraph("Finishing the core drawing engine, lots of testing, and integrating the following features:"),
        ContentBlock::list(&[
            "layer management",
            "export to PDF (with proper scale)",
            "automatic map legend generation",
            "integration into Storm, so BMPs specced on the map automatically appear in the BMPs narrative",
        ]),
        ContentBlock::paragraph("The long-term goal is to bring the entire SWPPP creation workflow under one roof."),
        ContentBlock::heading("Why This Matters"),
        ContentBlock::paragraph("If you're a QSP/QSD, inspector, civil engineer, or contractor, you know how painful SWPPP creation can be. Drawing BMPs shouldn't take longer than writing the plan. It shouldn't require expensive software. And it shouldn't look sloppy."),
        ContentBlock::paragraph("This prototype is an attempt to fix that."),
        ContentBlock::paragraph("A clean, modern, cloud-based drawing tool—purpose-built for BMPs."),
        ContentBlock::paragraph("I can't wait to show the first official release - coming soon!"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_slug() {
        let post = find("swppp-mapping-prototype").unwrap();
        assert!(post.title.contains("SWPPP Mapping"));
        assert!(matches!(post.body, PostBody::Blocks(_)));
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(find("no-such-post").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in all().iter().enumerate() {
            for b in &all()[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn video_posts_have_resolvable_thumbnails() {
        for post in all() {
            if let Some(url) = post.video_url {
                assert!(
                    crate::vimeo::thumbnail_url(Some(url)).is_some(),
                    "unresolvable video url on {}",
                    post.slug
                );
            }
        }
    }

    #[test]
    fn block_bodies_render_without_dropping_content() {
        let post = find("swppp-mapping-prototype").unwrap();
        if let PostBody::Blocks(build) = &post.body {
            let blocks = build();
            // Every image in this post has a source, so nothing is skipped.
            assert_eq!(
                crate::blog::blocks::render_blocks(&blocks).len(),
                blocks.len()
            );
        }
    }
}
