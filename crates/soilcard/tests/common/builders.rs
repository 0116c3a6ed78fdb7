//! Builders for test configs and synthetic soil-health cards.

#![allow(dead_code)]

use lopdf::{dictionary, Document, Object, Stream};
use soilcard::config::{Config, ExtractionConfig, OcrConfig, RecommendationConfig};

/// Card text in the layout printed on most government soil-health cards.
pub const SAMPLE_CARD_LINES: &[&str] = &[
    "SOIL HEALTH CARD",
    "Farmer: R. Kumar  Village: Hosur",
    "pH: 6.8",
    "Available Nitrogen (N): 145 kg/ha",
    "Phosphorus (P2O5): 28 kg/ha",
    "Potassium (K2O): 195 kg/ha",
    "Organic Matter: 4.2",
    "Moisture: 35",
];

pub fn sample_card_text() -> String {
    SAMPLE_CARD_LINES.join("\n")
}

/// Builder for `Config` instances.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Defaults with OCR enabled, as a fresh install would have.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn version(mut self, version: &str) -> Self {
        self.config.version = version.to_string();
        self
    }

    pub fn ocr(mut self, enabled: bool) -> Self {
        self.config.ocr.enabled = enabled;
        self
    }

    pub fn languages(mut self, languages: &[&str]) -> Self {
        self.config.ocr.languages = languages.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn preprocess(mut self, preprocess: bool) -> Self {
        self.config.ocr.preprocess = preprocess;
        self
    }

    pub fn pattern_confidence(mut self, confidence: f64) -> Self {
        self.config.extraction.pattern_confidence = confidence;
        self
    }

    pub fn pdf_confidence(mut self, confidence: f64) -> Self {
        self.config.extraction.pdf_confidence = confidence;
        self
    }

    pub fn max_recommendations(mut self, max_results: usize) -> Self {
        self.config.recommendations.max_results = max_results;
        self
    }

    pub fn recommendations(mut self, enabled: bool) -> Self {
        self.config.recommendations.enabled = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.config).unwrap()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Spelled out so tests fail loudly if the config shape changes.
pub fn full_config_json() -> String {
    let config = Config {
        version: "1.0".to_string(),
        ocr: OcrConfig {
            enabled: false,
            languages: vec!["eng".to_string(), "hin".to_string()],
            preprocess: false,
            data_path: Some("/usr/share/tessdata".to_string()),
            temp_directory: None,
        },
        extraction: ExtractionConfig {
            pattern_confidence: 80.0,
            pdf_confidence: 99.0,
        },
        recommendations: RecommendationConfig {
            enabled: true,
            max_results: 3,
        },
    };
    serde_json::to_string(&config).unwrap()
}

/// Builds a one-page PDF with each line in its own text object.
pub struct CardPdfBuilder {
    lines: Vec<String>,
}

impl CardPdfBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|l| l.to_string()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut content = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            let escaped = line
                .replace('\\', "\\\\")
                .replace('(', "\\(")
                .replace(')', "\\)");
            let y = 740 - (i as i64) * 16;
            content.push_str(&format!("BT /F1 11 Tf 50 {} Td ({}) Tj ET\n", y, escaped));
        }
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }
}

impl Default for CardPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A small grey-gradient PNG, decodable by the preprocessing step.
pub fn card_png() -> Vec<u8> {
    let img = image::GrayImage::from_fn(48, 32, |x, y| image::Luma([((x * 4 + y * 2) % 256) as u8]));
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}
