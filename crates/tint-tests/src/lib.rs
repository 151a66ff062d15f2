//! Integration tests for tint crates.
//!
//! This crate contains end-to-end tests that exercise image decoding,
//! extraction, generation and the palette library together.

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;
    use tint_core::{HexColor, Palette, is_valid_hex};
    use tint_extract::{extract_dominant_color, extract_palette};
    use tint_harmony::{
        GeneratorAction, GeneratorState, HarmonyType, generate, generate_palette, harmony_types,
    };
    use tint_io::export::{export_saved, export_saved_all};
    use tint_io::{ExportFormat, NewPalette, PaletteLibrary, SavedPalette, export, load_pixels};

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
        let path = dir.join(name);
        img.save_with_format(&path, ImageFormat::Png).unwrap();
        path
    }

    /// Three equal vertical stripes.
    fn stripes(width: u32, height: u32, colors: [[u8; 3]; 3]) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            let [r, g, b] = colors[(x * 3 / width) as usize];
            Rgba([r, g, b, 255])
        })
    }

    #[test]
    fn test_png_to_palette() {
        let dir = tempdir().unwrap();
        let img = stripes(30, 10, [[200, 40, 40], [40, 200, 40], [40, 40, 200]]);
        let path = write_png(dir.path(), "stripes.png", &img);

        let decoded = load_pixels(&path).unwrap();
        assert_eq!((decoded.width, decoded.height), (30, 10));
        let pixels = decoded.pixels().unwrap();

        let palette = extract_palette(&pixels, 3);
        assert_eq!(palette, [hex("#c82828"), hex("#28c828"), hex("#2828c8")]);
        assert_eq!(extract_dominant_color(&pixels), hex("#c82828"));
    }

    #[test]
    fn test_large_png_is_downscaled() {
        let dir = tempdir().unwrap();
        let img = RgbaImage::from_pixel(1200, 600, Rgba([66, 135, 245, 255]));
        let path = write_png(dir.path(), "big.png", &img);

        let decoded = load_pixels(&path).unwrap();
        assert_eq!((decoded.width, decoded.height), (500, 250));
        assert_eq!(extract_dominant_color(&decoded.pixels().unwrap()), hex("#4088f8"));
    }

    #[test]
    fn test_transparent_png() {
        let dir = tempdir().unwrap();
        let img = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 0]));
        let path = write_png(dir.path(), "clear.png", &img);

        let decoded = load_pixels(&path).unwrap();
        let pixels = decoded.pixels().unwrap();
        assert_eq!(extract_dominant_color(&pixels), HexColor::BLACK);
        assert!(extract_palette(&pixels, 5).is_empty());
    }

    #[test]
    fn test_missing_image() {
        let dir = tempdir().unwrap();
        assert!(load_pixels(dir.path().join("nope.png")).is_err());
    }

    #[test]
    fn test_dominant_color_seeds_generator() {
        let dir = tempdir().unwrap();
        let img = RgbaImage::from_pixel(20, 20, Rgba([255, 0, 0, 255]));
        let path = write_png(dir.path(), "red.png", &img);
        let decoded = load_pixels(&path).unwrap();

        // 255 quantizes to 256, which clamps back to ff.
        let base = extract_dominant_color(&decoded.pixels().unwrap());
        assert_eq!(base, hex("#ff0000"));

        let state = GeneratorState::default()
            .reduce(GeneratorAction::SetBaseColor(base.to_string()))
            .reduce(GeneratorAction::SetHarmony(HarmonyType::Triadic))
            .reduce(GeneratorAction::SetColorCount(3));
        assert_eq!(state.palette.to_string(), "#ff0000, #00ff00, #0000ff");
    }

    #[test]
    fn test_every_harmony_yields_valid_colors() {
        for info in harmony_types() {
            for count in 1..=10 {
                let palette = generate_palette("#3a7bd5", info.id, count).unwrap();
                assert_eq!(palette.len(), count, "{} {count}", info.id);
                for c in &palette {
                    assert!(is_valid_hex(&c.to_string()));
                }
            }
        }
    }

    #[test]
    fn test_library_roundtrip_through_generator() {
        let dir = tempdir().unwrap();
        let lib_path = dir.path().join("palettes.json");

        let state = GeneratorState::default()
            .reduce(GeneratorAction::SetBaseColor("#e07a5f".into()))
            .reduce(GeneratorAction::SetHarmony(HarmonyType::Compound))
            .reduce(GeneratorAction::SetColorCount(7))
            .reduce(GeneratorAction::SetName("Terracotta".into()));

        let id = {
            let mut lib = PaletteLibrary::open(&lib_path).unwrap();
            lib.save(NewPalette::from(&state)).unwrap()
        };

        let lib = PaletteLibrary::open(&lib_path).unwrap();
        let saved = lib.get(id).unwrap();
        assert_eq!(saved.name, "Terracotta");
        assert_eq!(saved.color_count, 7);
        assert_eq!(saved.colors, state.palette);

        let restored = GeneratorState::default().reduce(GeneratorAction::Load {
            base_color: saved.base_color,
            harmony: saved.harmony_type,
            colors: saved.colors.clone(),
        });
        assert_eq!(restored.palette, state.palette);
        assert_eq!(restored.base_color, state.base_color);
        assert_eq!(restored.harmony, HarmonyType::Compound);
    }

    #[test]
    fn test_saved_export_is_camel_case_json() {
        let dir = tempdir().unwrap();
        let mut lib = PaletteLibrary::open(dir.path().join("lib.json")).unwrap();
        let base = hex("#336699");
        let colors: Palette = generate(&base, HarmonyType::Square, 4);
        let id = lib
            .save(NewPalette {
                name: String::new(),
                base_color: base,
                harmony_type: HarmonyType::Square,
                color_count: 4,
                colors: colors.clone(),
                date_created: Some(1_650_000_000),
            })
            .unwrap();

        let one = export_saved(lib.get(id).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&one).unwrap();
        assert_eq!(value["name"], "Palette 1");
        assert_eq!(value["baseColor"], "#336699");
        assert_eq!(value["harmonyType"], "square");
        assert_eq!(value["colorCount"], 4);
        assert_eq!(value["dateCreated"], 1_650_000_000);
        assert_eq!(value["colors"].as_array().unwrap().len(), 4);

        let all = export_saved_all(lib.all()).unwrap();
        let parsed: Vec<SavedPalette> = serde_json::from_str(&all).unwrap();
        assert_eq!(parsed, lib.all());
    }

    #[test]
    fn test_export_formats_number_every_color() {
        let colors = generate(&hex("#4287f5"), HarmonyType::Analogous, 5);
        let css = export(&colors, ExportFormat::Css, "brand").unwrap();
        let scss = export(&colors, ExportFormat::Scss, "brand").unwrap();
        let tw = export(&colors, ExportFormat::Tailwind, "brand").unwrap();
        for n in 1..=5 {
            assert!(css.contains(&format!("--brand-{n}: ")));
            assert!(scss.contains(&format!("$brand-{n}: ")));
            assert!(tw.contains(&format!("'color{n}': ")));
        }
        for c in &colors {
            assert!(css.contains(&c.to_string()));
        }
    }
}
