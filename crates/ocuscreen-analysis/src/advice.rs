use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ocuscreen_core::models::risk::RiskTier;

/// Headline and advice shown for a risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Guidance {
    pub tier: RiskTier,
    pub headline: String,
    pub advice: Vec<String>,
}

const LOW: (&str, &[&str]) = (
    "Low risk of dry eye",
    &[
        "Keep blinking fully and regularly, especially during screen work.",
        "Follow the 20-20-20 rule: every 20 minutes, look 20 feet away for 20 seconds.",
        "Stay hydrated and keep a balanced diet rich in omega-3 fatty acids.",
        "Repeat the screening in six months or if symptoms appear.",
    ],
);

const MEDIUM: (&str, &[&str]) = (
    "Medium risk of dry eye",
    &[
        "Use preservative-free artificial tears when your eyes feel dry or tired.",
        "Reduce continuous screen time and take regular breaks.",
        "Avoid air from fans, heaters, or air conditioning blowing at your face.",
        "Use a humidifier in dry indoor environments.",
        "See an eye care professional if symptoms persist for more than two weeks.",
    ],
);

const HIGH: (&str, &[&str]) = (
    "High risk of dry eye",
    &[
        "Book an appointment with an optometrist or ophthalmologist soon.",
        "Do not start prescription eye drops without professional advice.",
        "Apply warm compresses and practise eyelid hygiene twice a day.",
        "Wear wraparound glasses outdoors to protect against wind and dust.",
        "Limit contact lens wear until you have been examined.",
    ],
);

/// The fixed guidance for a tier. A pure table lookup.
pub fn guidance(tier: RiskTier) -> Guidance {
    let (headline, advice) = match tier {
        RiskTier::Low => LOW,
        RiskTier::Medium => MEDIUM,
        RiskTier::High => HIGH,
    };
    Guidance {
        tier,
        headline: headline.to_string(),
        advice: advice.iter().map(|s| s.to_string()).collect(),
    }
}
