use anyhow::Result;
use colored::*;

use crate::classify::classify_raw;
use crate::core::LabelLanguage;

pub fn handle_classify(
    clarity: &[u8],
    intensity: u8,
    json: bool,
    language: LabelLanguage,
) -> Result<()> {
    // clap guarantees exactly three values via num_args
    let [c1, c2, c3]: [u8; 3] = clarity
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected exactly three clarity ratings"))?;

    let classification = classify_raw(c1, c2, c3, intensity)?;

    if json {
        let out = serde_json::json!({
            "code": classification.emotion_type.code(),
            "label": classification.emotion_type.label_in(language),
            "clarity_avg": classification.rounded_clarity_avg(),
            "intensity": classification.intensity.get(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "Emotion experience type: {} ({})",
            classification.emotion_type.label_in(language).green().bold(),
            classification.emotion_type.code()
        );
        println!("  Clarity average: {:.2}", classification.clarity_avg);
        println!("  Intensity: {}", classification.intensity);
    }

    Ok(())
}
