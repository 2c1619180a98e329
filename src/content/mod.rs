//! Static site content: blog posts, canned articles, testimonials, hero slides, and stats.
//!
//! Everything here is immutable data compiled into the binary.

pub mod router;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub image: &'static str,
    pub title: &'static str,
    /// Also the key of the downloadable article.
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: u8,
    pub name: &'static str,
    pub title: &'static str,
    pub rating: u8,
    pub quote: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroSlide {
    pub headline: &'static str,
    pub body: &'static str,
    pub call_to_action: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatUnit {
    Count,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatDefinition {
    pub label: &'static str,
    pub target: u32,
    pub unit: StatUnit,
}

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        image: "/images/blogpage/1.png",
        title: "The Importance of Upskilling in Today's Job Market",
        subtitle: "Why Upskilling Matters in 2025",
    },
    BlogPost {
        image: "/images/blogpage/2.png",
        title: "How Gamified Learning Enhances Skill Retention",
        subtitle: "The Psychology Behind Gamification",
    },
    BlogPost {
        image: "/images/blogpage/3.png",
        title: "Soft Skills vs. Hard Skills: What Matters More?",
        subtitle: "The Difference Between Soft and Hard Skills",
    },
];

const WHY_UPSKILLING_MATTERS: &str = "
In 2025, the professional landscape is rapidly evolving due to advances in technology and shifting market demands. Continuous upskilling has become crucial to stay competitive and relevant. Employees who invest in learning new skills are more likely to achieve job satisfaction, earn better promotions, and adapt to future changes without stress.

Upskilling also benefits employers by yielding a workforce capable of embracing innovation. Companies are actively seeking candidates who show drive for growth and learning.

Key Benefits of Upskilling:
- Increased employability and career security
- Enhanced adaptability in a changing market
- Higher earning potential
- Exposure to new technologies and methodologies

Stay ahead by mastering both technical and soft skills in 2025!
  ";

const PSYCHOLOGY_OF_GAMIFICATION: &str = "
Gamification applies game elements in non-game contexts to boost motivation and engagement. It leverages psychological principles, like reward cycles, social competition, and goal-setting, to tap into people's natural desires for achievement and recognition.

Why Gamification Works:
- Rewards and badges stimulate dopamine release, boosting motivation
- Progress bars and levels encourage sustained effort
- Leaderboards foster healthy competition
- Challenges and milestones give a sense of accomplishment

This approach transforms repetitive tasks, learning modules, or workplace procedures into engaging experiences, resulting in higher productivity and satisfaction.

Try introducing gamification into learning, fitness, or professional settings to see how powerful psychology can be!
  ";

const SOFT_VS_HARD_SKILLS: &str = "
Hard skills are teachable, measurable abilities\u{2014}like coding, accounting, or hardware repair. They\u{2019}re acquired through education and practice, and usually defined by certifications or technical tests.

Soft skills are interpersonal attributes: communication, critical thinking, problem solving, teamwork, and leadership. They\u{2019}re often intrinsic or developed through experience and are vital for collaboration and workplace harmony.

Examples:
- Hard skills: Python programming, financial modeling, driving
- Soft skills: Empathy, flexibility, conflict resolution

Both are essential. Hard skills get a foot in the door, but soft skills pave the way to career advancement.
  ";

/// Article bodies keyed by the blog post subtitle.
pub const ARTICLES: [(&str, &str); 3] = [
    ("Why Upskilling Matters in 2025", WHY_UPSKILLING_MATTERS),
    ("The Psychology Behind Gamification", PSYCHOLOGY_OF_GAMIFICATION),
    ("The Difference Between Soft and Hard Skills", SOFT_VS_HARD_SKILLS),
];

pub fn article_body(title: &str) -> Option<&'static str> {
    ARTICLES
        .iter()
        .find(|(key, _)| *key == title)
        .map(|(_, body)| *body)
}

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        id: 1,
        name: "Jennifer Cooper",
        title: "Startup Founder, TechFlow",
        rating: 5,
        quote: "SkillKwiz has transformed our hiring process. We've reduced our time-to-hire by 40% and improved candidate quality significantly. The detailed skill reports give us confidence in every hiring decision.",
        image: "/images/homepage/5.png",
    },
    Testimonial {
        id: 2,
        name: "Michael Donovan",
        title: "HR Director, Global Systems",
        rating: 4,
        quote: "As an enterprise with hundreds of technical hires annually, SkillKwiz has been invaluable. Their comprehensive skill assessments and secure testing environment ensure we get accurate insights into candidate capabilities.",
        image: "/images/homepage/6.png",
    },
    Testimonial {
        id: 3,
        name: "Sarah Johnson",
        title: "Talent Acquisition, InnovateTech",
        rating: 4,
        quote: "The flexibility of SkillKwiz's platform is what sets it apart. We can customize assessments to our specific needs, and the detailed reports help us make data-driven hiring decisions every time.",
        image: "/images/homepage/6.png",
    },
    Testimonial {
        id: 4,
        name: "David Chen",
        title: "CTO, FutureTech Solutions",
        rating: 5,
        quote: "The technical assessments from SkillKwiz have been spot-on. We're able to quickly identify candidates with the right skills, saving our engineering team countless hours of interview time.",
        image: "/images/homepage/5.png",
    },
    Testimonial {
        id: 5,
        name: "Emily Rodriguez",
        title: "Recruiting Manager, Innovate Inc",
        rating: 5,
        quote: "SkillKwiz has become an essential part of our hiring toolkit. The platform is intuitive, the assessments are comprehensive, and the customer support is exceptional.",
        image: "/images/homepage/7.png",
    },
];

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        headline: "Master Your Skills with Expert Quizzes",
        body: "Take interactive quizzes designed by industry experts. Track your progress, get personalized feedback and build verified skills.",
        call_to_action: "Get Started",
        link: "/services",
    },
    HeroSlide {
        headline: "Verified Skill Assessments, Simplifying Recruitment",
        body: "SkillKwiz delivers rigorous, industry-aligned skill evaluations that empower organizations to make informed hiring decisions swiftly and confidently.",
        call_to_action: "Get Started",
        link: "/services",
    },
    HeroSlide {
        headline: "Ready to revolutionize hiring?",
        body: "Join leading companies optimizing recruitment through trusted skill assessments. Start your journey with SkillKwiz today.",
        call_to_action: "Get Started",
        link: "/services",
    },
];

pub const STATS: [StatDefinition; 3] = [
    StatDefinition {
        label: "Expert Quizzes",
        target: 500,
        unit: StatUnit::Count,
    },
    StatDefinition {
        label: "Active Users",
        target: 50000,
        unit: StatUnit::Count,
    },
    StatDefinition {
        label: "Success Rate",
        target: 95,
        unit: StatUnit::Percent,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_blog_post_has_an_article() {
        for post in BLOG_POSTS {
            let body = article_body(post.subtitle).expect("article present");
            assert!(body.starts_with('\n'));
            assert!(body.trim().len() > 100);
        }
        assert_eq!(article_body("Unknown Title"), None);
    }

    #[test]
    fn stats_targets_match_home_page() {
        let targets: Vec<u32> = STATS.iter().map(|stat| stat.target).collect();
        assert_eq!(targets, vec![500, 50000, 95]);
    }
}
