//! Sprite catalogue
//!
//! Every glyph the assembler can place is loaded from the resource root
//! once at startup. A missing or unreadable sprite is a startup error, so
//! painting never has to deal with a hole in the catalogue.

use doomguy_status_core::StatusError;
use doomguy_status_types::GlyphToken;
use gtk4::gdk_pixbuf::Pixbuf;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Loaded sprites keyed by glyph
pub struct SpriteCatalogue {
    root: PathBuf,
    sprites: HashMap<GlyphToken, Pixbuf>,
}

impl SpriteCatalogue {
    /// Load the full glyph catalogue from `root`
    pub fn load(root: &Path) -> Result<Self, StatusError> {
        if !root.is_dir() {
            return Err(StatusError::ConfigurationInvalid(format!(
                "graphics directory {} does not exist",
                root.display()
            )));
        }

        let glyphs = GlyphToken::catalogue();
        let mut sprites = HashMap::with_capacity(glyphs.len());
        for glyph in glyphs {
            let name = glyph.resource_name();
            let path = root.join(&name);
            let pixbuf = Pixbuf::from_file(&path).map_err(|e| StatusError::ResourceMissing {
                name: name.clone(),
                path: path.clone(),
                reason: e.to_string(),
            })?;
            log::trace!("Loaded {} ({}x{})", name, pixbuf.width(), pixbuf.height());
            sprites.insert(glyph, pixbuf);
        }

        log::info!("Loaded {} sprites from {}", sprites.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            sprites,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, glyph: GlyphToken) -> Option<&Pixbuf> {
        self.sprites.get(&glyph)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::sprite_dir;
    use super::*;

    #[test]
    fn test_load_full_catalogue() {
        let dir = sprite_dir("sprites-full");
        let catalogue = SpriteCatalogue::load(&dir).unwrap();
        assert_eq!(catalogue.len(), GlyphToken::catalogue().len());
        assert_eq!(catalogue.get(GlyphToken::FaceGod).map(|p| p.width()), Some(4));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_sprite_names_the_file() {
        let dir = sprite_dir("sprites-missing");
        std::fs::remove_file(dir.join("stfouch1.png")).unwrap();
        match SpriteCatalogue::load(&dir) {
            Err(StatusError::ResourceMissing { name, .. }) => assert_eq!(name, "stfouch1.png"),
            other => panic!("expected ResourceMissing, got {:?}", other.err()),
        }
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_root_must_be_a_directory() {
        let err = SpriteCatalogue::load(Path::new("/nonexistent/doomguy/graphics")).err();
        assert!(matches!(err, Some(StatusError::ConfigurationInvalid(_))));
    }
}
