// 🎨 Color Collection - Owned mutable color list
// The one mutable collection in the system. Callers own the instance and
// serialize access (the server wraps it in Arc<Mutex<_>>); nothing here is
// ambient or global.

use rand::Rng;

/// Mutable list of favorite colors, seeded with the default palette
#[derive(Debug, Clone)]
pub struct ColorList {
    colors: Vec<String>,
}

impl ColorList {
    pub fn new() -> Self {
        ColorList {
            colors: vec![
                "Red".to_string(),
                "Green".to_string(),
                "Blue".to_string(),
                "Yellow".to_string(),
                "Purple".to_string(),
                "Orange".to_string(),
            ],
        }
    }

    pub fn all(&self) -> &[String] {
        &self.colors
    }

    /// Random color from the list
    pub fn random(&self) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        let idx = rand::thread_rng().gen_range(0..self.colors.len());
        Some(&self.colors[idx])
    }

    /// Colors whose first letter matches, case-insensitively
    pub fn search(&self, letter: char) -> Vec<String> {
        let upper = letter.to_ascii_uppercase();
        self.colors
            .iter()
            .filter(|c| c.chars().next() == Some(upper))
            .cloned()
            .collect()
    }

    /// Add a color, title-cased; duplicates are ignored
    pub fn add(&mut self, color: &str) -> &[String] {
        if let Some(first) = color.chars().next() {
            let normalized = format!(
                "{}{}",
                first.to_uppercase(),
                color[first.len_utf8()..].to_lowercase()
            );
            if !self.colors.contains(&normalized) {
                self.colors.push(normalized);
            }
        }
        &self.colors
    }
}

impl Default for ColorList {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
