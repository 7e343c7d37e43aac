//! Site configuration.
//!
//! Every field has a default, so a page can ship a partial `site-config`
//! JSON block (or none at all).

use serde::Deserialize;
use tracing::debug;

use crate::{ReceitaError, Result};

/// Tunables for the page controllers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Height of the fixed header, subtracted from scroll targets (px)
    pub header_offset_px: f64,

    /// Hero slider rotation period (ms)
    pub hero_interval_ms: u32,

    /// Ordered hero background images
    pub hero_images: Vec<String>,

    /// How long the copy button shows its "copied" label (ms)
    pub copy_feedback_ms: u32,

    /// How long a toast stays on screen (ms)
    pub toast_ms: u32,

    /// Lines rendered in bold when a recipe line matches one of these
    /// (case-insensitive, surrounding whitespace ignored)
    pub section_labels: Vec<String>,

    /// User-visible strings
    pub labels: Labels,
}

/// User-visible strings used by the modal and sharing flows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub copy_idle: String,
    pub copy_done: String,
    pub copy_failed: String,
    pub recipe_empty: String,
    pub recipe_unavailable: String,
    pub share_copied: String,
    pub image_alt: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 70.0,
            hero_interval_ms: 6000,
            hero_images: vec![
                "img/hero-1.jpg".to_string(),
                "img/hero-2.jpg".to_string(),
                "img/hero-3.jpg".to_string(),
            ],
            copy_feedback_ms: 1800,
            toast_ms: 5000,
            section_labels: [
                "Materiais:",
                "Ingredientes:",
                "Modo de preparo:",
                "Modo de fazer:",
                "Rendimento:",
                "Dica:",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            labels: Labels::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            copy_idle: "Copiar receita".to_string(),
            copy_done: "Copiado!".to_string(),
            copy_failed: "Não foi possível copiar automaticamente. Selecione e copie manualmente."
                .to_string(),
            recipe_empty: "Receita vazia.".to_string(),
            recipe_unavailable: "Receita não disponível para este item.".to_string(),
            share_copied:
                "Receita copiada para a área de transferência. Abra o app desejado e cole a mensagem."
                    .to_string(),
            image_alt: "Imagem do produto".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config block. Missing fields keep their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        debug!(
            "Loaded site config: header offset {}px, {} hero images every {}ms",
            config.header_offset_px,
            config.hero_images.len(),
            config.hero_interval_ms
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.hero_interval_ms == 0 {
            return Err(ReceitaError::Config(
                "hero_interval_ms must be greater than zero".to_string(),
            ));
        }
        if !self.header_offset_px.is_finite() || self.header_offset_px < 0.0 {
            return Err(ReceitaError::Config(format!(
                "header_offset_px must be a non-negative number, got {}",
                self.header_offset_px
            )));
        }
        Ok(())
    }

    /// Whether `line` is one of the configured section labels.
    pub fn is_section_label(&self, line: &str) -> bool {
        let line = line.trim();
        !line.is_empty()
            && self
                .section_labels
                .iter()
                .any(|label| label.trim().eq_ignore_ascii_case(line))
    }
}
