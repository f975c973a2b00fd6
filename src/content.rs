//! Static overview and happiness insights for each sign.
//!
//! The table is a `static` array in zodiac order, so a sign's ordinal is its
//! index and lookups cannot miss.

use serde::Serialize;

use crate::Sign;
use crate::prelude::*;

/// The four areas of life each sign carries advice for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    #[display(fmt = "Faith & Meaning")]
    Faith,
    #[display(fmt = "Family & Relationships")]
    Family,
    #[display(fmt = "Work & Purpose")]
    Work,
    #[display(fmt = "Service & Contribution")]
    Service,
}

impl InsightCategory {
    /// Categories in the order they are presented.
    pub const ALL: [Self; 4] = [Self::Faith, Self::Family, Self::Work, Self::Service];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub faith:   &'static str,
    pub family:  &'static str,
    pub work:    &'static str,
    pub service: &'static str,
}

impl Insights {
    pub const fn get(&self, category: InsightCategory) -> &'static str {
        match category {
            InsightCategory::Faith => self.faith,
            InsightCategory::Family => self.family,
            InsightCategory::Work => self.work,
            InsightCategory::Service => self.service,
        }
    }

    /// Yields `(category, text)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (InsightCategory, &'static str)> + '_ {
        InsightCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// The pre-authored text bundle for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    pub sign:     Sign,
    pub overview: &'static str,
    pub insights: Insights,
}

/// Returns the record for `sign`.
pub fn lookup(sign: Sign) -> &'static ContentRecord {
    &TABLE[sign.index()]
}

/// Every record, in zodiac order.
pub fn records() -> &'static [ContentRecord] {
    &TABLE
}

static TABLE: [ContentRecord; 12] = [
    ContentRecord {
        sign:     Sign::Aries,
        overview: "Bold and energetic, Aries thrive on new challenges and spontaneous adventure. Your fiery nature makes you a natural leader who takes initiative with enthusiasm.",
        insights: Insights {
            faith:   "Anchor your fiery energy with mindfulness practices like meditation or yoga. Cultivate patience and reflection to bring meaning to your pursuits.",
            family:  "Invest quality time with loved ones. Your enthusiasm is contagious\u{2014}use it to inspire deep connections rather than rushing ahead.",
            work:    "Channel your initiative into collaborative projects that serve a greater purpose. Balance ambition with cooperation.",
            service: "Volunteer or mentor where your leadership skills can shine. Leading others toward a common goal will bring fulfillment.",
        },
    },
    ContentRecord {
        sign:     Sign::Taurus,
        overview: "Grounded and reliable, Taurus values stability, comfort, and sensual pleasure. You are patient and persistent, with a strong appreciation for beauty.",
        insights: Insights {
            faith:   "Cultivate gratitude by savoring life\u{2019}s simple pleasures. Mindful appreciation of nature and art can deepen your sense of purpose.",
            family:  "Nurture relationships by sharing your calm presence. Offer support and loyalty, and allow others to see your softer side.",
            work:    "Engage in work that appeals to your sense of quality and craftsmanship. Create environments where beauty and practicality coexist.",
            service: "Provide tangible assistance\u{2014}cooking a meal or creating something beautiful for others will nourish your heart.",
        },
    },
    ContentRecord {
        sign:     Sign::Gemini,
        overview: "Curious and adaptable, Gemini loves communication and variety. Your quick mind and wit make you a natural storyteller and learner.",
        insights: Insights {
            faith:   "Find meaning through exploration. Reading, writing, or teaching spiritual and philosophical ideas can feed your dual nature.",
            family:  "Stay present in your relationships by practicing active listening. Deep conversations are as nourishing as new experiences.",
            work:    "Engage your intellect with roles that require communication and adaptability. Variety keeps you inspired.",
            service: "Use your gift for words to advocate for causes or mentor others in communication skills.",
        },
    },
    ContentRecord {
        sign:     Sign::Cancer,
        overview: "Nurturing and intuitive, Cancer is deeply connected to home and family. Your emotional depth allows you to empathize and care for others.",
        insights: Insights {
            faith:   "Connect to your inner world through journaling or creative expression. Reflecting on emotions helps you find meaning.",
            family:  "Prioritize time with family and close friends. Your nurturing presence brings safety and love to those around you.",
            work:    "Seek roles where you can support and care for others, whether through teaching, healing, or creating safe spaces.",
            service: "Volunteer in community projects that protect and uplift vulnerable groups. Your empathy makes a difference.",
        },
    },
    ContentRecord {
        sign:     Sign::Leo,
        overview: "Confident and generous, Leo thrives in the spotlight and loves to share warmth and creativity. Your passion inspires others.",
        insights: Insights {
            faith:   "Cultivate humility through gratitude and reflection. Connect to a higher purpose beyond personal recognition.",
            family:  "Shine your light on loved ones by celebrating their achievements. Loyalty and generosity strengthen bonds.",
            work:    "Lead with heart and authenticity. Creative pursuits and recognition fuel your motivation.",
            service: "Use your charisma to support charitable causes. Hosting events or raising awareness brings joy.",
        },
    },
    ContentRecord {
        sign:     Sign::Virgo,
        overview: "Analytical and meticulous, Virgo seeks order and service. You excel at organizing, refining, and bringing structure to chaos.",
        insights: Insights {
            faith:   "Practice acceptance; not everything needs perfection. Meditation or gentle movement can calm your mind.",
            family:  "Share your helpful nature without overdoing it. Balance giving advice with simply listening and being present.",
            work:    "Find satisfaction in roles requiring precision and problem-solving. Serve others through attention to detail.",
            service: "Volunteer in environments that benefit from your organizational skills. Your efficiency can uplift many.",
        },
    },
    ContentRecord {
        sign:     Sign::Libra,
        overview: "Diplomatic and charming, Libra seeks harmony and balance. You appreciate beauty and have a natural sense of fairness.",
        insights: Insights {
            faith:   "Center yourself through artistic expression or contemplative practices. Harmony comes from inner balance.",
            family:  "Cultivate deep connections by sharing heartfelt conversation and collaboration. Your grace creates peace.",
            work:    "Engage in work involving aesthetics, justice, or mediation. Partnering with others suits your cooperative nature.",
            service: "Advocate for social justice or community arts programs. Your sense of fairness inspires positive change.",
        },
    },
    ContentRecord {
        sign:     Sign::Scorpio,
        overview: "Intense and transformative, Scorpio explores depth and mystery. Your passion and resilience empower profound change.",
        insights: Insights {
            faith:   "Explore the unseen through meditation, psychology, or spiritual study. Transformation brings deeper meaning.",
            family:  "Strengthen bonds through trust and vulnerability. Sharing your inner world nurtures intimacy.",
            work:    "Pursue careers involving research, healing, or transformation. Your focus brings success.",
            service: "Support others through crisis counseling, mentorship, or advocacy. Your strength is a beacon.",
        },
    },
    ContentRecord {
        sign:     Sign::Sagittarius,
        overview: "Adventurous and optimistic, Sagittarius loves freedom and exploration. You seek wisdom through travel and philosophy.",
        insights: Insights {
            faith:   "Pursue spiritual learning and broad perspectives. Daily gratitude keeps your optimism grounded.",
            family:  "Share your stories and curiosity with loved ones. Invite them on your adventures and respect their viewpoints.",
            work:    "Choose roles that allow growth, travel, or knowledge sharing. Your enthusiasm is contagious.",
            service: "Teach or mentor others, especially about cultures or ideas. Sharing wisdom fuels joy.",
        },
    },
    ContentRecord {
        sign:     Sign::Capricorn,
        overview: "Disciplined and ambitious, Capricorn works steadily toward long-term goals. You value responsibility, tradition, and achievement.",
        insights: Insights {
            faith:   "Find meaning in creating structures that endure. Balance ambition with reflection and rest.",
            family:  "Demonstrate love through acts of service and reliability. Make time for connection beyond work.",
            work:    "Pursue careers that reward dedication and leadership. Your patience and discipline lead to success.",
            service: "Mentor younger generations or contribute to institutions that foster growth. Your legacy inspires others.",
        },
    },
    ContentRecord {
        sign:     Sign::Aquarius,
        overview: "Innovative and humanitarian, Aquarius seeks to break conventions and foster community. Your vision is focused on the collective good.",
        insights: Insights {
            faith:   "Explore unconventional spirituality or science to understand your place in the universe. Seek intellectual freedom.",
            family:  "Connect deeply by honoring each person\u{2019}s uniqueness. Authentic dialogue builds trust.",
            work:    "Work in cutting-edge fields or social innovation. Collaborate with groups pushing boundaries.",
            service: "Volunteer for causes that promote equality and progress. Your ideas can transform communities.",
        },
    },
    ContentRecord {
        sign:     Sign::Pisces,
        overview: "Compassionate and imaginative, Pisces feels deeply and dreams abundantly. You are intuitive and often drawn to the mystical.",
        insights: Insights {
            faith:   "Nurture your spirituality through art, music, or meditation. Boundaries help maintain balance.",
            family:  "Express love through empathy and understanding. Create safe spaces for open emotional exchanges.",
            work:    "Engage in creative or healing professions. Your sensitivity enriches your work.",
            service: "Support humanitarian causes or healing arts. Channel your compassion into service.",
        },
    },
];
