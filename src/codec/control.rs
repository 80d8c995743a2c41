//! Recognition of the ASCII control prefixes JWW smuggles through
//! CDataMoji content: `^@` carries a settings assignment, `^@BM` an
//! external bitmap reference. Recognition is by literal substring at the
//! start of the decoded string.

/// Prefix of a metadata assignment record.
pub const META_PREFIX: &str = "^@";
/// Prefix of an external bitmap reference record.
pub const BITMAP_PREFIX: &str = "^@BM";

/// Setting keys the metadata side channel recognizes. Anything else after
/// `^@` is ordinary text.
pub const META_KEYS: [&str; 6] = [
    "printer_paper_size",
    "draw_bmp_touka",
    "view_direct2d",
    "printer_bmp_zentai",
    "printer_orientation",
    "printer_d2d_bmp",
];

/// External bitmap reference carried by a `^@BM` record.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapRef {
    pub path: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// What a decoded CDataMoji content string actually is.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    Bitmap(BitmapRef),
    Setting { key: &'static str, value: String },
    Plain,
}

pub fn classify(content: &str) -> TextContent {
    if let Some(params) = content.strip_prefix(BITMAP_PREFIX) {
        return TextContent::Bitmap(parse_bitmap_ref(params));
    }
    if let Some(assignment) = content.strip_prefix(META_PREFIX) {
        for key in META_KEYS {
            let Some(rest) = assignment.strip_prefix(key) else {
                continue;
            };
            // the key must be followed by `=` or end exactly; a longer
            // identifier sharing the prefix is ordinary text
            if let Some(value) = rest.strip_prefix('=') {
                return TextContent::Setting {
                    key,
                    value: value.to_string(),
                };
            }
            if rest.is_empty() {
                return TextContent::Setting {
                    key,
                    value: String::new(),
                };
            }
        }
    }
    TextContent::Plain
}

/// Parses `path|x|y|width|height|rotation`; absent trailing fields and
/// unparseable numbers default to 0.
fn parse_bitmap_ref(params: &str) -> BitmapRef {
    let mut fields = params.split('|');
    let path = fields.next().unwrap_or_default().to_string();
    let mut numbers = [0.0f64; 5];
    for slot in numbers.iter_mut() {
        match fields.next() {
            Some(raw) => *slot = raw.trim().parse().unwrap_or(0.0),
            None => break,
        }
    }
    BitmapRef {
        path,
        x: numbers[0],
        y: numbers[1],
        width: numbers[2],
        height: numbers[3],
        rotation: numbers[4],
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, BitmapRef, TextContent};

    #[test]
    fn plain_text_stays_plain() {
        assert_eq!(classify("図面タイトル"), TextContent::Plain);
        assert_eq!(classify(""), TextContent::Plain);
        assert_eq!(classify("@^not a prefix"), TextContent::Plain);
    }

    #[test]
    fn bare_bitmap_prefix_yields_empty_reference() {
        assert_eq!(
            classify("^@BM"),
            TextContent::Bitmap(BitmapRef {
                path: String::new(),
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                rotation: 0.0,
            })
        );
    }

    #[test]
    fn bitmap_reference_with_all_fields() {
        let content = "^@BMplan.bmp|10.5|-2|640|480|90";
        assert_eq!(
            classify(content),
            TextContent::Bitmap(BitmapRef {
                path: "plan.bmp".to_string(),
                x: 10.5,
                y: -2.0,
                width: 640.0,
                height: 480.0,
                rotation: 90.0,
            })
        );
    }

    #[test]
    fn bitmap_reference_missing_trailing_fields_defaults_to_zero() {
        let TextContent::Bitmap(bitmap) = classify("^@BMfloor.png|1|2") else {
            panic!("expected bitmap");
        };
        assert_eq!(bitmap.path, "floor.png");
        assert_eq!((bitmap.x, bitmap.y), (1.0, 2.0));
        assert_eq!((bitmap.width, bitmap.height, bitmap.rotation), (0.0, 0.0, 0.0));
    }

    #[test]
    fn recognized_setting_key_is_an_assignment() {
        assert_eq!(
            classify("^@printer_orientation=landscape"),
            TextContent::Setting {
                key: "printer_orientation",
                value: "landscape".to_string(),
            }
        );
        assert_eq!(
            classify("^@view_direct2d"),
            TextContent::Setting {
                key: "view_direct2d",
                value: String::new(),
            }
        );
    }

    #[test]
    fn unknown_or_extended_key_is_plain_text() {
        assert_eq!(classify("^@mystery_key=1"), TextContent::Plain);
        // key must match exactly, not as a prefix of a longer identifier
        assert_eq!(classify("^@printer_paper_sizes=A4"), TextContent::Plain);
    }
}
