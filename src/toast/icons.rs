// SPDX-License-Identifier: MPL-2.0
//! Per-widget cache of category icons.
//!
//! The vector sources are embedded in the binary and rasterized once, when the
//! cache is built, to a fixed height. The cache is owned by the widget and is
//! released with it; it is never written to after construction.

use super::category::Category;
use crate::config::ICON_HEIGHT;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use resvg::usvg;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct IconAssets;

/// A decoded icon ready to be drawn.
#[derive(Debug, Clone)]
pub struct Icon {
    handle: Handle,
    width: u32,
    height: u32,
}

impl Icon {
    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Icons keyed by [`Category::icon_key`].
#[derive(Debug, Default)]
pub struct IconCache {
    entries: HashMap<&'static str, Icon>,
}

impl IconCache {
    /// Cache with no icons. Cards render without an icon.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rasterizes every category icon to [`ICON_HEIGHT`].
    ///
    /// An asset that fails to load is logged and left out; the matching
    /// category then renders without an icon.
    #[must_use]
    pub fn load() -> Self {
        let mut cache = Self::empty();
        for category in Category::ALL {
            match load_icon(category.asset_file(), ICON_HEIGHT) {
                Ok(icon) => cache.insert(category.icon_key(), icon),
                Err(err) => {
                    tracing::warn!(key = category.icon_key(), error = %err, "icon skipped");
                }
            }
        }
        tracing::debug!(icons = cache.len(), "icon cache populated");
        cache
    }

    pub fn insert(&mut self, key: &'static str, icon: Icon) {
        self.entries.insert(key, icon);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Icon> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn for_category(&self, category: Category) -> Option<&Icon> {
        self.get(category.icon_key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn load_icon(file: &str, target_height: u32) -> Result<Icon> {
    let asset = IconAssets::get(file).ok_or_else(|| Error::Icon(format!("{file}: not embedded")))?;
    rasterize_to_height(asset.data.as_ref(), target_height)
        .map_err(|err| Error::Icon(format!("{file}: {err}")))
}

/// Renders SVG data into an RGBA icon of the given height, keeping the aspect ratio.
pub fn rasterize_to_height(svg: &[u8], target_height: u32) -> Result<Icon> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default())
        .map_err(|err| Error::Icon(err.to_string()))?;

    let orig_size = tree.size();
    let scale = target_height as f32 / orig_size.height();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Icon sources are small squares; the scaled width is a few dozen pixels.
    let width = ((orig_size.width() * scale).round() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(width, target_height)
        .ok_or_else(|| Error::Icon(format!("invalid icon size {width}x{target_height}")))?;
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; image handles expect straight alpha.
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(Icon {
        handle: Handle::from_rgba(width, target_height, rgba),
        width,
        height: target_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_populates_every_category() {
        let cache = IconCache::load();
        assert_eq!(cache.len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(cache.for_category(category).is_some(), "{category:?} missing");
        }
    }

    #[test]
    fn icons_are_prescaled_to_icon_height() {
        let cache = IconCache::load();
        for category in Category::ALL {
            let icon = cache.for_category(category).expect("icon loaded");
            assert_eq!(icon.height(), ICON_HEIGHT);
            assert_eq!(icon.width(), ICON_HEIGHT, "sources are square");
        }
    }

    #[test]
    fn rasterize_rejects_invalid_svg() {
        let result = rasterize_to_height(b"<not-svg", ICON_HEIGHT);
        assert!(matches!(result, Err(Error::Icon(_))));
    }

    #[test]
    fn rasterize_keeps_aspect_ratio() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20"><rect width="40" height="20" fill="red"/></svg>"#;
        let icon = rasterize_to_height(svg, 80).expect("valid svg");
        assert_eq!(icon.width(), 160);
        assert_eq!(icon.height(), 80);
    }
}
