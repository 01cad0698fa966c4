//! Static bilingual catalogs: farming tips and weather alerts
//!
//! Loaded once at first use and never mutated. Catalog order is
//! significant: the recommendation engine breaks score ties by source
//! order.

use std::sync::LazyLock;

use crate::models::{
    Crop, FarmingTip, GrowthStage, IrrigationType, Season, SoilType, State, TipCategory,
    TipPriority, WeatherAlert, WeatherAlertKind, WeatherTrigger,
};
use crate::types::LocalizedText;

fn text(en: &str, hi: &str) -> LocalizedText {
    LocalizedText::new(en, hi)
}

/// The full farming tip catalog
pub fn farming_tips() -> &'static [FarmingTip] {
    &FARMING_TIPS
}

/// The weather alert catalog
pub fn weather_alerts() -> &'static [WeatherAlert] {
    &WEATHER_ALERTS
}

static FARMING_TIPS: LazyLock<Vec<FarmingTip>> = LazyLock::new(|| {
    use Crop::*;
    use Season::*;
    use SoilType::*;
    use State::*;

    vec![
        FarmingTip {
            id: "wheat-planting-winter".into(),
            category: TipCategory::Planting,
            icon: "sprout".into(),
            title: text("Wheat Planting Time", "गेहूं की बुवाई का समय"),
            description: text(
                "Best time to plant wheat is mid-November. Ensure soil temperature is 18-20°C for optimal germination.",
                "गेहूं बोने का सबसे अच्छा समय नवंबर का मध्य है। इष्टतम अंकुरण के लिए मिट्टी का तापमान 18-20°C होना चाहिए।",
            ),
            rationale: None,
            priority: TipPriority::High,
            crops: vec![Wheat],
            states: vec![Punjab, Haryana, UttarPradesh],
            soil_types: vec![Alluvial, Loamy],
            seasons: vec![Rabi],
            growth_stages: Some(vec![GrowthStage::Sowing]),
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "rice-kharif-irrigation-high".into(),
            category: TipCategory::Irrigation,
            icon: "cloud-rain".into(),
            title: text("Paddy Drainage in Heavy Monsoon", "भारी मानसून में धान की जल निकासी"),
            description: text(
                "During heavy monsoon spells, drain standing water above 5 cm within 24 hours. Prolonged submergence beyond the tillering stage cuts yield.",
                "भारी मानसून के दौरान 5 सेमी से अधिक खड़े पानी को 24 घंटे के भीतर निकाल दें। कल्ले निकलने की अवस्था के बाद लंबे समय तक जलमग्न रहने से उपज घटती है।",
            ),
            rationale: Some(text(
                "Heavy rain with high humidity promotes both waterlogging and bacterial blight.",
                "उच्च आर्द्रता के साथ भारी बारिश जलभराव और जीवाणु झुलसा दोनों को बढ़ावा देती है।",
            )),
            priority: TipPriority::High,
            crops: vec![Rice],
            states: vec![Punjab, Haryana, UttarPradesh],
            soil_types: vec![Alluvial, Clay],
            seasons: vec![Kharif],
            growth_stages: None,
            irrigation_types: None,
            weather_trigger: Some(WeatherTrigger {
                min_rainfall: Some(20.0),
                min_humidity: Some(70.0),
                ..Default::default()
            }),
        },
        FarmingTip {
            id: "rice-high-temp-irrigation".into(),
            category: TipCategory::Irrigation,
            icon: "thermometer-sun".into(),
            title: text("Extra Irrigation in Heat", "गर्मी में अतिरिक्त सिंचाई"),
            description: text(
                "Above 35°C, maintain a thin water film on paddy fields and irrigate in the evening to limit evaporation losses.",
                "35°C से ऊपर धान के खेतों में पानी की पतली परत बनाए रखें और वाष्पीकरण हानि कम करने के लिए शाम को सिंचाई करें।",
            ),
            rationale: None,
            priority: TipPriority::High,
            crops: vec![Rice],
            states: vec![Punjab, Haryana],
            soil_types: vec![Alluvial],
            seasons: vec![Kharif, Zaid],
            growth_stages: None,
            irrigation_types: None,
            weather_trigger: Some(WeatherTrigger {
                min_temp: Some(35.0),
                ..Default::default()
            }),
        },
        FarmingTip {
            id: "rice-irrigation".into(),
            category: TipCategory::Irrigation,
            icon: "droplets".into(),
            title: text("Rice Water Management", "चावल जल प्रबंधन"),
            description: text(
                "Maintain 2-3 inches of standing water for first 10 days after transplanting. Drain field 7-10 days before harvest.",
                "रोपाई के बाद पहले 10 दिनों के लिए 2-3 इंच खड़े पानी को बनाए रखें। कटाई से 7-10 दिन पहले खेत को सूखा दें।",
            ),
            rationale: None,
            priority: TipPriority::Medium,
            crops: vec![Rice],
            states: vec![Punjab, Haryana, UttarPradesh, Maharashtra],
            soil_types: vec![Alluvial, Clay],
            seasons: vec![Kharif],
            growth_stages: None,
            irrigation_types: Some(vec![IrrigationType::Canal, IrrigationType::Tubewell]),
            weather_trigger: None,
        },
        FarmingTip {
            id: "cotton-pest-control".into(),
            category: TipCategory::Pest,
            icon: "bug".into(),
            title: text("Cotton Bollworm Control", "कपास बॉलवर्म नियंत्रण"),
            description: text(
                "Monitor for bollworm from flowering stage. Use pheromone traps and neem-based pesticides. Apply early morning or late evening.",
                "फूल आने की अवस्था से बॉलवर्म की निगरानी करें। फेरोमोन ट्रैप और नीम आधारित कीटनाशकों का उपयोग करें। सुबह जल्दी या देर शाम को लगाएं।",
            ),
            rationale: None,
            priority: TipPriority::High,
            crops: vec![Cotton],
            states: vec![Gujarat, Maharashtra, MadhyaPradesh],
            soil_types: vec![Black],
            seasons: vec![Kharif],
            growth_stages: Some(vec![GrowthStage::Flowering]),
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "sugarcane-fertilizer".into(),
            category: TipCategory::Fertilizer,
            icon: "plant".into(),
            title: text("Sugarcane Nutrition", "गन्ना पोषण"),
            description: text(
                "Apply 120 kg Nitrogen, 60 kg Phosphorus, and 40 kg Potassium per hectare. Split nitrogen in 3 doses at planting, 45 days, and 90 days.",
                "प्रति हेक्टेयर 120 किलोग्राम नाइट्रोजन, 60 किलोग्राम फास्फोरस और 40 किलोग्राम पोटैशियम डालें। नाइट्रोजन को रोपण, 45 दिन और 90 दिन पर 3 खुराक में विभाजित करें।",
            ),
            rationale: None,
            priority: TipPriority::Medium,
            crops: vec![Sugarcane],
            states: vec![UttarPradesh, Maharashtra, Gujarat],
            soil_types: vec![Alluvial, Black, Loamy],
            seasons: vec![Kharif, Rabi],
            growth_stages: Some(vec![GrowthStage::Sowing, GrowthStage::Vegetative]),
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "general-neem-spray".into(),
            category: TipCategory::Pest,
            icon: "spray-can".into(),
            title: text("Organic Pest Prevention", "जैविक कीट रोकथाम"),
            description: text(
                "Mix 50ml neem oil in 10 liters of water with 5ml liquid soap. Spray on crops every 7-10 days as preventive measure.",
                "50 मिली नीम का तेल 10 लीटर पानी में 5 मिली तरल साबुन के साथ मिलाएं। निवारक उपाय के रूप में हर 7-10 दिनों में फसलों पर स्प्रे करें।",
            ),
            rationale: None,
            priority: TipPriority::Medium,
            crops: vec![Wheat, Rice, Cotton, Sugarcane, Maize, Pulses],
            states: vec![Punjab, Haryana, UttarPradesh, MadhyaPradesh, Maharashtra, Gujarat],
            soil_types: vec![Alluvial, Black, Red, Sandy, Clay, Loamy],
            seasons: vec![Kharif, Rabi, Zaid],
            growth_stages: None,
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "maize-planting".into(),
            category: TipCategory::Planting,
            icon: "sprout".into(),
            title: text("Maize Sowing Guidelines", "मक्का बुवाई दिशानिर्देश"),
            description: text(
                "Plant maize in rows 60-75 cm apart. Maintain plant-to-plant spacing of 20-25 cm. Sow 2-3 seeds per hole, thin to 1 after germination.",
                "मक्का को 60-75 सेमी दूर पंक्तियों में लगाएं। पौधे से पौधे की दूरी 20-25 सेमी रखें। प्रति गड्ढे 2-3 बीज बोएं, अंकुरण के बाद 1 करें।",
            ),
            rationale: None,
            priority: TipPriority::Medium,
            crops: vec![Maize],
            states: vec![Punjab, Haryana, UttarPradesh, MadhyaPradesh],
            soil_types: vec![Loamy, Sandy],
            seasons: vec![Zaid, Kharif],
            growth_stages: Some(vec![GrowthStage::Sowing]),
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "pulses-irrigation".into(),
            category: TipCategory::Irrigation,
            icon: "droplets".into(),
            title: text("Pulse Crop Water Needs", "दलहन फसल जल आवश्यकता"),
            description: text(
                "Pulses need less water than cereals. Irrigate at flowering and pod formation stages. Avoid waterlogging as it damages root nodules.",
                "दालों को अनाज की तुलना में कम पानी की आवश्यकता होती है। फूल और फली बनने की अवस्था में सिंचाई करें। जलभराव से बचें क्योंकि यह जड़ ग्रंथियों को नुकसान पहुंचाता है।",
            ),
            rationale: None,
            priority: TipPriority::Medium,
            crops: vec![Pulses],
            states: vec![Punjab, Haryana, UttarPradesh, MadhyaPradesh, Maharashtra, Gujarat],
            soil_types: vec![Loamy, Sandy, Red],
            seasons: vec![Rabi],
            growth_stages: Some(vec![GrowthStage::Flowering]),
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "alluvial-soil-care".into(),
            category: TipCategory::Fertilizer,
            icon: "mountain".into(),
            title: text("Alluvial Soil Management", "जलोढ़ मिट्टी प्रबंधन"),
            description: text(
                "Add organic matter through composting. Alluvial soil is naturally fertile but benefits from green manuring with crops like dhaincha.",
                "कम्पोस्टिंग के माध्यम से जैविक पदार्थ जोड़ें। जलोढ़ मिट्टी स्वाभाविक रूप से उपजाऊ है लेकिन ढैंचा जैसी फसलों से हरी खाद से लाभान्वित होती है।",
            ),
            rationale: None,
            priority: TipPriority::Low,
            crops: vec![Wheat, Rice, Sugarcane, Maize],
            states: vec![Punjab, Haryana, UttarPradesh],
            soil_types: vec![Alluvial],
            seasons: vec![Kharif, Rabi, Zaid],
            growth_stages: None,
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "black-soil-care".into(),
            category: TipCategory::Fertilizer,
            icon: "mountain".into(),
            title: text("Black Soil Moisture Retention", "काली मिट्टी नमी प्रतिधारण"),
            description: text(
                "Black cotton soil retains moisture well. Plow after first monsoon shower. Add gypsum to improve structure if soil becomes too hard.",
                "काली कपास मिट्टी नमी को अच्छी तरह से बनाए रखती है। पहली मानसूनी बारिश के बाद जुताई करें। यदि मिट्टी बहुत कठोर हो जाए तो संरचना में सुधार के लिए जिप्सम जोड़ें।",
            ),
            rationale: None,
            priority: TipPriority::Low,
            crops: vec![Cotton, Sugarcane, Pulses],
            states: vec![Maharashtra, MadhyaPradesh, Gujarat],
            soil_types: vec![Black],
            seasons: vec![Kharif],
            growth_stages: None,
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "wheat-harvest-timing".into(),
            category: TipCategory::Harvest,
            icon: "calendar".into(),
            title: text("Wheat Harvest Timing", "गेहूं कटाई का समय"),
            description: text(
                "Harvest wheat when grain moisture is 20-25%. Grains should be hard and difficult to crush between fingers. Usually ready in late March to April.",
                "गेहूं की कटाई तब करें जब अनाज की नमी 20-25% हो। अनाज कठोर होना चाहिए और उंगलियों के बीच कुचलना मुश्किल हो। आमतौर पर मार्च के अंत से अप्रैल में तैयार होता है।",
            ),
            rationale: None,
            priority: TipPriority::High,
            crops: vec![Wheat],
            states: vec![Punjab, Haryana, UttarPradesh, MadhyaPradesh],
            soil_types: vec![Alluvial, Loamy],
            seasons: vec![Rabi],
            growth_stages: Some(vec![GrowthStage::Harvesting]),
            irrigation_types: None,
            weather_trigger: None,
        },
        FarmingTip {
            id: "rice-pest-management".into(),
            category: TipCategory::Pest,
            icon: "bug".into(),
            title: text("Rice Stem Borer Control", "धान तना छेदक नियंत्रण"),
            description: text(
                "Release egg parasitoid Trichogramma at 15-day intervals starting from 30 days after transplanting. Light traps can attract and kill adult moths.",
                "रोपाई के 30 दिन बाद से शुरू करके 15-दिन के अंतराल पर अंडा परजीवी ट्राइकोग्रामा छोड़ें। प्रकाश जाल वयस्क कीटों को आकर्षित और मार सकते हैं।",
            ),
            rationale: Some(text(
                "Borer pressure climbs sharply in humid spells.",
                "आर्द्र मौसम में तना छेदक का प्रकोप तेजी से बढ़ता है।",
            )),
            priority: TipPriority::Medium,
            crops: vec![Rice],
            states: vec![Punjab, Haryana, UttarPradesh],
            soil_types: vec![Alluvial, Clay],
            seasons: vec![Kharif],
            growth_stages: Some(vec![GrowthStage::Vegetative]),
            irrigation_types: None,
            weather_trigger: Some(WeatherTrigger {
                min_humidity: Some(70.0),
                ..Default::default()
            }),
        },
        FarmingTip {
            id: "cotton-irrigation-schedule".into(),
            category: TipCategory::Irrigation,
            icon: "droplets".into(),
            title: text("Cotton Water Schedule", "कपास जल कार्यक्रम"),
            description: text(
                "Irrigate cotton at 30, 60, 90, and 120 days after sowing. Critical stages are flowering and boll formation. Stop irrigation 15 days before harvest.",
                "बुवाई के 30, 60, 90 और 120 दिनों बाद कपास की सिंचाई करें। महत्वपूर्ण अवस्थाएं फूल आना और बोल बनना हैं। कटाई से 15 दिन पहले सिंचाई बंद करें।",
            ),
            rationale: None,
            priority: TipPriority::Medium,
            crops: vec![Cotton],
            states: vec![Gujarat, Maharashtra, MadhyaPradesh],
            soil_types: vec![Black],
            seasons: vec![Kharif],
            growth_stages: None,
            irrigation_types: Some(vec![IrrigationType::Drip, IrrigationType::Canal]),
            weather_trigger: None,
        },
        FarmingTip {
            id: "wheat-frost-protection".into(),
            category: TipCategory::Irrigation,
            icon: "snowflake".into(),
            title: text("Frost Protection for Wheat", "गेहूं के लिए पाला संरक्षण"),
            description: text(
                "When night temperature drops near 5°C, give a light evening irrigation. Moist soil releases heat overnight and protects the crown.",
                "जब रात का तापमान 5°C के करीब गिर जाए तो शाम को हल्की सिंचाई करें। नम मिट्टी रात भर गर्मी छोड़ती है और पौधे की रक्षा करती है।",
            ),
            rationale: None,
            priority: TipPriority::High,
            crops: vec![Wheat],
            states: vec![Punjab, Haryana],
            soil_types: vec![Alluvial, Loamy],
            seasons: vec![Rabi],
            growth_stages: None,
            irrigation_types: None,
            weather_trigger: Some(WeatherTrigger {
                max_temp: Some(5.0),
                ..Default::default()
            }),
        },
        FarmingTip {
            id: "dry-spell-mulching".into(),
            category: TipCategory::Irrigation,
            icon: "sun".into(),
            title: text("Mulch During Dry Spells", "सूखे के दौरान मल्चिंग"),
            description: text(
                "In hot dry spells, spread straw mulch between rows to hold soil moisture. Rain-fed fields benefit the most.",
                "गर्म सूखे मौसम में मिट्टी की नमी बनाए रखने के लिए पंक्तियों के बीच पुआल की मल्च बिछाएं। वर्षा आधारित खेतों को सबसे अधिक लाभ होता है।",
            ),
            rationale: None,
            priority: TipPriority::Medium,
            crops: vec![Cotton, Maize, Pulses],
            states: vec![MadhyaPradesh, Maharashtra, Gujarat],
            soil_types: vec![Black, Red, Sandy],
            seasons: vec![Kharif, Zaid],
            growth_stages: None,
            irrigation_types: Some(vec![IrrigationType::RainFed]),
            weather_trigger: Some(WeatherTrigger {
                min_temp: Some(32.0),
                max_rainfall: Some(2.0),
                ..Default::default()
            }),
        },
    ]
});

static WEATHER_ALERTS: LazyLock<Vec<WeatherAlert>> = LazyLock::new(|| {
    vec![
        WeatherAlert {
            id: "heavy-rain-alert".into(),
            kind: WeatherAlertKind::HeavyRain,
            icon: "cloud-rain".into(),
            title: text("Heavy Rainfall Alert", "भारी वर्षा चेतावनी"),
            description: text(
                "Heavy rainfall expected in your area. Standing water can damage roots.",
                "आपके क्षेत्र में भारी वर्षा की संभावना है। खड़ा पानी जड़ों को नुकसान पहुंचा सकता है।",
            ),
            action: text(
                "Clear drainage channels and postpone fertilizer application.",
                "जल निकासी चैनल साफ करें और उर्वरक डालना स्थगित करें।",
            ),
        },
        WeatherAlert {
            id: "high-temp-alert".into(),
            kind: WeatherAlertKind::HighTemp,
            icon: "thermometer-sun".into(),
            title: text("High Temperature Alert", "उच्च तापमान चेतावनी"),
            description: text(
                "Temperature above 35°C. Crops may face heat stress and rapid soil drying.",
                "तापमान 35°C से ऊपर है। फसलों को गर्मी का तनाव और मिट्टी के तेजी से सूखने का सामना करना पड़ सकता है।",
            ),
            action: text(
                "Irrigate in the early morning or evening and avoid midday spraying.",
                "सुबह जल्दी या शाम को सिंचाई करें और दोपहर में छिड़काव से बचें।",
            ),
        },
        WeatherAlert {
            id: "high-humidity-alert".into(),
            kind: WeatherAlertKind::HighHumidity,
            icon: "droplets".into(),
            title: text("High Humidity Alert", "उच्च आर्द्रता चेतावनी"),
            description: text(
                "Humidity above 70%. Fungal diseases and pest activity increase in humid conditions.",
                "आर्द्रता 70% से ऊपर है। आर्द्र परिस्थितियों में फफूंद रोग और कीट गतिविधि बढ़ जाती है।",
            ),
            action: text(
                "Inspect leaves for early disease symptoms and improve air circulation.",
                "रोग के शुरुआती लक्षणों के लिए पत्तियों की जांच करें और हवा का संचार बेहतर करें।",
            ),
        },
        WeatherAlert {
            id: "low-humidity-alert".into(),
            kind: WeatherAlertKind::LowHumidity,
            icon: "sun".into(),
            title: text("Low Humidity Alert", "कम आर्द्रता चेतावनी"),
            description: text(
                "Humidity below 30%. Dry air increases water demand and wilting risk.",
                "आर्द्रता 30% से नीचे है। शुष्क हवा पानी की मांग और मुरझाने का जोखिम बढ़ाती है।",
            ),
            action: text(
                "Increase irrigation frequency and consider mulching to retain moisture.",
                "सिंचाई की आवृत्ति बढ़ाएं और नमी बनाए रखने के लिए मल्चिंग पर विचार करें।",
            ),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_ids_are_unique() {
        let tips = farming_tips();
        for (i, tip) in tips.iter().enumerate() {
            for other in &tips[i + 1..] {
                assert_ne!(tip.id, other.id, "duplicate tip id {}", tip.id);
            }
        }
    }

    #[test]
    fn test_every_alert_kind_present() {
        let alerts = weather_alerts();
        for kind in [
            WeatherAlertKind::HeavyRain,
            WeatherAlertKind::HighTemp,
            WeatherAlertKind::HighHumidity,
            WeatherAlertKind::LowHumidity,
        ] {
            let alert = alerts
                .iter()
                .find(|a| a.kind == kind)
                .unwrap_or_else(|| panic!("no alert for {:?}", kind));
            assert!(!alert.title.hi.is_empty());
        }
    }

    #[test]
    fn test_end_to_end_example_entries_exist() {
        let ids: Vec<&str> = farming_tips().iter().map(|t| t.id.as_str()).collect();
        assert!(ids.contains(&"rice-kharif-irrigation-high"));
        assert!(ids.contains(&"rice-high-temp-irrigation"));
    }
}
