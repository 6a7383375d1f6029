use posecam_frame::{
    CropPolicy, FrameError, FrameResampler, MAX_TARGET_SIDE, PixelLayout, SourceFrame, TargetSpec,
    resample_into,
};

/// Known RGB value for every source pixel.
fn pattern(x: usize, y: usize) -> [u8; 3] {
    [(x % 251) as u8, (y % 241) as u8, ((x * 7 + y * 13) % 256) as u8]
}

/// Builds a frame with `padding` junk bytes after every row.
fn build_frame(width: usize, height: usize, layout: PixelLayout, padding: usize) -> (Vec<u8>, usize) {
    let stride = width * layout.bytes_per_pixel() + padding;
    match layout {
        PixelLayout::Bgra8 | PixelLayout::Rgb8 => {
            let mut data = vec![0xAA; stride * height];
            for y in 0..height {
                for x in 0..width {
                    let [r, g, b] = pattern(x, y);
                    let i = y * stride + x * layout.bytes_per_pixel();
                    if layout == PixelLayout::Bgra8 {
                        data[i..i + 4].copy_from_slice(&[b, g, r, 0xFF]);
                    } else {
                        data[i..i + 3].copy_from_slice(&[r, g, b]);
                    }
                }
            }
            (data, stride)
        }
        PixelLayout::RgbPlanar => {
            let plane = stride * height;
            let mut data = vec![0xAA; plane * 3];
            for y in 0..height {
                for x in 0..width {
                    let rgb = pattern(x, y);
                    for (p, value) in rgb.iter().enumerate() {
                        data[p * plane + y * stride + x] = *value;
                    }
                }
            }
            (data, stride)
        }
    }
}

fn output_pixel(out: &[u8], target_width: usize, x: usize, y: usize) -> [u8; 3] {
    let i = (y * target_width + x) * 3;
    [out[i], out[i + 1], out[i + 2]]
}

#[test]
fn test_output_length_matches_target() {
    let cases = [(640, 480, 192, 192), (1920, 1080, 256, 256), (300, 400, 100, 50), (17, 9, 17, 9), (5, 5, 1, 1)];
    for policy in [CropPolicy::CenterCropResample, CropPolicy::ExactCrop] {
        for (sw, sh, tw, th) in cases {
            let (data, stride) = build_frame(sw, sh, PixelLayout::Bgra8, 0);
            let source = SourceFrame::new(sw, sh, stride, PixelLayout::Bgra8, &data).unwrap();
            let target = TargetSpec::new(tw, th).with_policy(policy);

            let mut resampler = FrameResampler::new();
            let out = resampler.resample(&source, &target).unwrap();
            assert_eq!(out.len(), tw * th * 3, "{sw}x{sh} -> {tw}x{th} ({policy:?})");
        }
    }
}

#[test]
fn test_bgra_channels_reordered_at_corners_and_center() {
    let (width, height) = (9, 7);
    let (data, stride) = build_frame(width, height, PixelLayout::Bgra8, 0);
    let source = SourceFrame::new(width, height, stride, PixelLayout::Bgra8, &data).unwrap();
    let target = TargetSpec::new(width, height).with_policy(CropPolicy::ExactCrop);

    let mut resampler = FrameResampler::new();
    let out = resampler.resample(&source, &target).unwrap();

    for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1), (4, 3)] {
        let i = y * stride + x * 4;
        let bgra = &data[i..i + 4];
        assert_eq!(output_pixel(out, width, x, y), [bgra[2], bgra[1], bgra[0]], "pixel ({x}, {y})");
    }
}

#[test]
fn test_square_source_resample_is_identity_at_full_size() {
    // no aspect difference and equal size: every destination pixel maps to itself
    let (data, stride) = build_frame(8, 8, PixelLayout::Bgra8, 0);
    let source = SourceFrame::new(8, 8, stride, PixelLayout::Bgra8, &data).unwrap();
    let target = TargetSpec::new(8, 8);

    let mut resampler = FrameResampler::new();
    let out = resampler.resample(&source, &target).unwrap();
    for (x, y) in [(0, 0), (7, 0), (0, 7), (7, 7), (4, 4)] {
        assert_eq!(output_pixel(out, 8, x, y), pattern(x, y));
    }
}

#[test]
fn test_square_source_downscale_samples_nearest() {
    let (data, stride) = build_frame(8, 8, PixelLayout::Rgb8, 0);
    let source = SourceFrame::new(8, 8, stride, PixelLayout::Rgb8, &data).unwrap();
    let target = TargetSpec::new(4, 4);

    let mut resampler = FrameResampler::new();
    let out = resampler.resample(&source, &target).unwrap();
    // floor(x / 4 * 8) = 2x
    for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3), (2, 1)] {
        assert_eq!(output_pixel(out, 4, x, y), pattern(2 * x, 2 * y));
    }
}

#[test]
fn test_stride_padding_does_not_change_output() {
    for layout in [PixelLayout::Bgra8, PixelLayout::Rgb8, PixelLayout::RgbPlanar] {
        for policy in [CropPolicy::CenterCropResample, CropPolicy::ExactCrop] {
            let (tight, tight_stride) = build_frame(64, 48, layout, 0);
            let (padded, padded_stride) = build_frame(64, 48, layout, 40);
            assert_ne!(tight_stride, padded_stride);

            let target = TargetSpec::new(24, 20).with_policy(policy);
            let mut a = vec![0; target.len()];
            let mut b = vec![0; target.len()];
            resample_into(&SourceFrame::new(64, 48, tight_stride, layout, &tight).unwrap(), &target, &mut a).unwrap();
            resample_into(&SourceFrame::new(64, 48, padded_stride, layout, &padded).unwrap(), &target, &mut b).unwrap();

            assert_eq!(a, b, "{layout:?} {policy:?}");
        }
    }
}

#[test]
fn test_exact_crop_400x300_to_200x200() {
    for layout in [PixelLayout::Bgra8, PixelLayout::Rgb8, PixelLayout::RgbPlanar] {
        let (data, stride) = build_frame(400, 300, layout, 8);
        let source = SourceFrame::new(400, 300, stride, layout, &data).unwrap();
        let target = TargetSpec::new(200, 200).with_policy(CropPolicy::ExactCrop);

        let mut resampler = FrameResampler::new();
        let out = resampler.resample(&source, &target).unwrap();
        for y in 0..200 {
            for x in 0..200 {
                assert_eq!(output_pixel(out, 200, x, y), source.rgb_at(x + 100, y + 50));
            }
        }
        assert_eq!(output_pixel(out, 200, 0, 0), pattern(100, 50));
        assert_eq!(output_pixel(out, 200, 199, 199), pattern(299, 249));
    }
}

#[test]
fn test_planar_source_matches_interleaved() {
    let (planar, planar_stride) = build_frame(30, 20, PixelLayout::RgbPlanar, 2);
    let (bgra, bgra_stride) = build_frame(30, 20, PixelLayout::Bgra8, 0);
    let target = TargetSpec::new(10, 10);

    let mut a = vec![0; target.len()];
    let mut b = vec![0; target.len()];
    resample_into(&SourceFrame::new(30, 20, planar_stride, PixelLayout::RgbPlanar, &planar).unwrap(), &target, &mut a).unwrap();
    resample_into(&SourceFrame::new(30, 20, bgra_stride, PixelLayout::Bgra8, &bgra).unwrap(), &target, &mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_repeated_resample_is_idempotent_and_reuses_buffer() {
    let (data, stride) = build_frame(320, 240, PixelLayout::Bgra8, 16);
    let source = SourceFrame::new(320, 240, stride, PixelLayout::Bgra8, &data).unwrap();
    let target = TargetSpec::new(192, 192);

    let mut resampler = FrameResampler::new();
    let first = resampler.resample(&source, &target).unwrap().to_vec();
    let first_ptr = resampler.buffer().as_ptr();
    let second = resampler.resample(&source, &target).unwrap().to_vec();

    assert_eq!(first, second);
    assert_eq!(resampler.buffer().as_ptr(), first_ptr);
    assert_eq!(resampler.resizes(), 1);
}

#[test]
fn test_buffer_resized_only_when_target_changes() {
    let (data, stride) = build_frame(100, 100, PixelLayout::Rgb8, 0);
    let source = SourceFrame::new(100, 100, stride, PixelLayout::Rgb8, &data).unwrap();

    let mut resampler = FrameResampler::with_capacity(&TargetSpec::new(32, 32)).unwrap();
    resampler.resample(&source, &TargetSpec::new(32, 32)).unwrap();
    assert_eq!(resampler.resizes(), 0);

    resampler.resample(&source, &TargetSpec::new(64, 48)).unwrap();
    resampler.resample(&source, &TargetSpec::new(48, 64)).unwrap();
    assert_eq!(resampler.resizes(), 1, "same byte length needs no resize");

    resampler.resample(&source, &TargetSpec::new(16, 16)).unwrap();
    assert_eq!(resampler.resizes(), 2);
    assert_eq!(resampler.buffer().len(), 16 * 16 * 3);
}

#[test]
fn test_resample_into_rejects_wrong_buffer_length() {
    let (data, stride) = build_frame(10, 10, PixelLayout::Rgb8, 0);
    let source = SourceFrame::new(10, 10, stride, PixelLayout::Rgb8, &data).unwrap();
    let target = TargetSpec::new(4, 4);

    for len in [47, 49, 0] {
        let mut out = vec![7u8; len];
        let err = resample_into(&source, &target, &mut out).unwrap_err();
        assert_eq!(err, FrameError::BufferSizeMismatch { expected: 48, got: len });
        assert!(out.iter().all(|&b| b == 7), "buffer must be left untouched");
    }
}

#[test]
fn test_zero_target_dimension_is_invalid() {
    let (data, stride) = build_frame(10, 10, PixelLayout::Rgb8, 0);
    let source = SourceFrame::new(10, 10, stride, PixelLayout::Rgb8, &data).unwrap();

    let mut resampler = FrameResampler::new();
    for target in [TargetSpec::new(0, 4), TargetSpec::new(4, 0)] {
        assert!(matches!(
            resampler.resample(&source, &target),
            Err(FrameError::InvalidDimensions(_))
        ));
    }
}

#[test]
fn test_target_larger_than_source_is_invalid() {
    let (data, stride) = build_frame(100, 50, PixelLayout::Bgra8, 0);
    let source = SourceFrame::new(100, 50, stride, PixelLayout::Bgra8, &data).unwrap();

    let mut resampler = FrameResampler::new();
    for target in [TargetSpec::new(101, 10), TargetSpec::new(10, 51)] {
        for policy in [CropPolicy::CenterCropResample, CropPolicy::ExactCrop] {
            assert!(matches!(
                resampler.resample(&source, &target.with_policy(policy)),
                Err(FrameError::InvalidDimensions(_))
            ));
        }
    }
    assert_eq!(resampler.resizes(), 0);
}

#[test]
fn test_with_capacity_rejects_unbounded_target() {
    let huge = 1usize << 32;
    for target in [
        TargetSpec::new(huge, huge),
        TargetSpec::new(MAX_TARGET_SIDE + 1, 16),
        TargetSpec::new(16, 0),
    ] {
        assert!(matches!(
            FrameResampler::with_capacity(&target),
            Err(FrameError::InvalidDimensions(_))
        ));
    }

    let largest = TargetSpec::new(MAX_TARGET_SIDE, 1);
    assert_eq!(
        FrameResampler::with_capacity(&largest).unwrap().buffer().len(),
        MAX_TARGET_SIDE * 3
    );
}

#[test]
fn test_target_len_does_not_overflow() {
    let huge = TargetSpec::new(usize::MAX, 2);
    assert_eq!(huge.checked_len(), None);
    assert_eq!(huge.len(), usize::MAX);
    assert_eq!(TargetSpec::new(192, 192).checked_len(), Some(192 * 192 * 3));
}

#[test]
fn test_crop_policy_names() {
    let policy: CropPolicy = serde_json::from_str("\"exact_crop\"").unwrap();
    assert_eq!(policy, CropPolicy::ExactCrop);
    assert_eq!(serde_json::to_string(&CropPolicy::CenterCropResample).unwrap(), "\"center_crop_resample\"");
    assert_eq!(CropPolicy::default(), CropPolicy::CenterCropResample);
}
