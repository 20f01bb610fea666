use std::collections::HashMap;

use image::{Rgb, Rgba};
use tracing::debug;

/// Three 20-color qualitative palettes (tab20, tab20b, tab20c) laid end to end
pub const PALETTE: [[u8; 3]; 60] = [
    // tab20
    [0x1f, 0x77, 0xb4], [0xae, 0xc7, 0xe8], [0xff, 0x7f, 0x0e], [0xff, 0xbb, 0x78],
    [0x2c, 0xa0, 0x2c], [0x98, 0xdf, 0x8a], [0xd6, 0x27, 0x28], [0xff, 0x98, 0x96],
    [0x94, 0x67, 0xbd], [0xc5, 0xb0, 0xd5], [0x8c, 0x56, 0x4b], [0xc4, 0x9c, 0x94],
    [0xe3, 0x77, 0xc2], [0xf7, 0xb6, 0xd2], [0x7f, 0x7f, 0x7f], [0xc7, 0xc7, 0xc7],
    [0xbc, 0xbd, 0x22], [0xdb, 0xdb, 0x8d], [0x17, 0xbe, 0xcf], [0x9e, 0xda, 0xe5],
    // tab20b
    [0x39, 0x3b, 0x79], [0x52, 0x54, 0xa3], [0x6b, 0x6e, 0xcf], [0x9c, 0x9e, 0xde],
    [0x63, 0x79, 0x39], [0x8c, 0xa2, 0x52], [0xb5, 0xcf, 0x6b], [0xce, 0xdb, 0x9c],
    [0x8c, 0x6d, 0x31], [0xbd, 0x9e, 0x39], [0xe7, 0xba, 0x52], [0xe7, 0xcb, 0x94],
    [0x84, 0x3c, 0x39], [0xad, 0x49, 0x4a], [0xd6, 0x61, 0x6b], [0xe7, 0x96, 0x9c],
    [0x7b, 0x41, 0x73], [0xa5, 0x51, 0x94], [0xce, 0x6d, 0xbd], [0xde, 0x9e, 0xd6],
    // tab20c
    [0x31, 0x82, 0xbd], [0x6b, 0xae, 0xd6], [0x9e, 0xca, 0xe1], [0xc6, 0xdb, 0xef],
    [0xe6, 0x55, 0x0d], [0xfd, 0x8d, 0x3c], [0xfd, 0xae, 0x6b], [0xfd, 0xd0, 0xa2],
    [0x31, 0xa3, 0x54], [0x74, 0xc4, 0x76], [0xa1, 0xd9, 0x9b], [0xc7, 0xe9, 0xc0],
    [0x75, 0x6b, 0xb1], [0x9e, 0x9a, 0xc8], [0xbc, 0xbd, 0xdc], [0xda, 0xda, 0xeb],
    [0x63, 0x63, 0x63], [0x96, 0x96, 0x96], [0xbd, 0xbd, 0xbd], [0xd9, 0xd9, 0xd9],
];

/// Palette color for the `index`-th distinct activity, cycling past the end
pub fn palette_color(index: usize) -> Rgb<u8> {
    Rgb(PALETTE[index % PALETTE.len()])
}

/// Applies a fill transparency in `[0, 1]` to a palette color
pub fn with_alpha(color: Rgb<u8>, alpha: f32) -> Rgba<u8> {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([color[0], color[1], color[2], a])
}

/// Activity name -> color, assigned in order of first occurrence
#[derive(Debug, Clone, Default)]
pub struct ActivityColorMap {
    order: Vec<String>,
    colors: HashMap<String, Rgb<u8>>,
}

impl ActivityColorMap {
    /// Builds the map from activity names in encounter order; repeats are ignored
    pub fn from_activities<'a, I>(activities: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = Self::default();
        for activity in activities {
            if map.colors.contains_key(activity) {
                continue;
            }
            let color = palette_color(map.order.len());
            map.order.push(activity.to_string());
            map.colors.insert(activity.to_string(), color);
        }

        if map.order.len() > PALETTE.len() {
            debug!(
                "{} distinct activities exceed the {}-color palette; colors will repeat",
                map.order.len(),
                PALETTE.len()
            );
        }
        map
    }

    pub fn color(&self, activity: &str) -> Option<Rgb<u8>> {
        self.colors.get(activity).copied()
    }

    /// Distinct activities in first-occurrence order
    pub fn activities(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
