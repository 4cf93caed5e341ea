#[cfg(test)]
mod tests {
    use super::super::*;
    use rgb::RGB8;
    use std::io::Cursor;

    fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
        let img: image::RgbaImage = image::ImageBuffer::from_raw(width, height, rgba).unwrap();
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_build_samples_preserves_pixel_order() {
        let buffer = vec![
            255, 0, 0, 255, //
            0, 255, 0, 128, //
            0, 0, 255, 0,
        ];
        let samples = build_samples(&buffer);
        assert_eq!(
            samples,
            vec![
                RGB8::new(255, 0, 0),
                RGB8::new(0, 255, 0),
                RGB8::new(0, 0, 255),
            ]
        );
    }

    #[test]
    fn test_build_samples_ignores_alpha() {
        let opaque = build_samples(&[10, 20, 30, 255]);
        let transparent = build_samples(&[10, 20, 30, 0]);
        assert_eq!(opaque, transparent);
    }

    #[test]
    fn test_build_samples_drops_trailing_partial_pixel() {
        let samples = build_samples(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(samples, vec![RGB8::new(1, 2, 3)]);
    }

    #[test]
    fn test_build_samples_empty_buffer() {
        assert!(build_samples(&[]).is_empty());
    }

    #[test]
    fn test_load_image_from_memory() {
        let rgba = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 0, 255,
        ];
        let png = encode_png(2, 2, rgba.clone());

        let image_data = load_image_from_memory(&png).unwrap();
        assert_eq!(image_data.width, 2);
        assert_eq!(image_data.height, 2);
        assert_eq!(image_data.pixel_count(), 4);
        assert_eq!(image_data.pixels, rgba);
    }

    #[test]
    fn test_load_image_from_memory_rejects_garbage() {
        let result = load_image_from_memory(b"definitely not an image");
        assert!(matches!(result, Err(PaletteError::ImageLoad(_))));
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(std::path::Path::new("/nonexistent/palette_input.png"));
        assert!(result.is_err());
    }
}
