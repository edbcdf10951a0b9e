/// End-to-end tests: bytes → bit-pairs → walk → histogram → panel.
use randomart::bits::bit_pairs;
use randomart::charset::Charset;
use randomart::error::ArtError;
use randomart::render::{self, Renderer, RendererConfig, DEFAULT_HASH_NAME, DEFAULT_KEY_NAME};
use randomart::walk::{walk, Dims, Position};

fn default_art(bytes: &[u8]) -> String {
    render::render(bytes, DEFAULT_KEY_NAME, DEFAULT_HASH_NAME, Dims::default()).unwrap()
}

fn assert_shape(art: &str, dims: Dims) {
    let lines: Vec<&str> = art.split('\n').collect();
    assert_eq!(lines.len(), dims.height + 2, "line count");
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.chars().count(), dims.width + 2, "line {i}: {line:?}");
    }
}

#[test]
fn zero_byte_walks_to_top_left() {
    let expected = "\
┏━━━━[RSA 4096]━━━┓
┃    E            ┃
┃     .           ┃
┃      .          ┃
┃       .         ┃
┃        S        ┃
┃                 ┃
┃                 ┃
┃                 ┃
┃                 ┃
┗━━━━━[SHA256]━━━━┛";
    assert_eq!(default_art(&[0x00]), expected);
}

#[test]
fn empty_input_marks_center_as_end() {
    let expected = "\
┏━━━━[RSA 4096]━━━┓
┃                 ┃
┃                 ┃
┃                 ┃
┃                 ┃
┃        E        ┃
┃                 ┃
┃                 ┃
┃                 ┃
┃                 ┃
┗━━━━━[SHA256]━━━━┛";
    let art = default_art(&[]);
    assert_eq!(art, expected);
    assert_shape(&art, Dims::default());
}

#[test]
fn md5_fingerprint_matches_reference_art() {
    // 16:27:ac:a5:76:28:2d:36:63:1b:56:4d:eb:df:a6:48
    let digest = [
        0x16, 0x27, 0xac, 0xa5, 0x76, 0x28, 0x2d, 0x36, 0x63, 0x1b, 0x56, 0x4d, 0xeb, 0xdf,
        0xa6, 0x48,
    ];
    let expected = "\
┏━━━━[RSA 2048]━━━┓
┃        .        ┃
┃       + .       ┃
┃      . B .      ┃
┃     o * +       ┃
┃    X * S        ┃
┃   + O o . .     ┃
┃    .   E . o    ┃
┃       . . o     ┃
┃        . .      ┃
┗━━━━━━[MD5]━━━━━━┛";
    let art = render::render(&digest, "RSA 2048", "MD5", Dims::default()).unwrap();
    assert_eq!(art, expected);
}

#[test]
fn saturated_cell_uses_densest_glyph() {
    // Eight zero bytes pin the bishop in the top-left corner for 25 visits,
    // then 0xFF walks it away so the end marker lands elsewhere.
    let mut bytes = vec![0x00; 8];
    bytes.push(0xFF);
    let dims = Dims::new(5, 3).unwrap();
    let art = render::render(&bytes, "ED25519 256", "SHA256", dims).unwrap();
    let expected = "\
┏[ED2]┓
┃^.   ┃
┃ .S  ┃
┃  ..E┃
┗[SHA]┛";
    assert_eq!(art, expected);
}

#[test]
fn dense_walk_on_small_grid() {
    let bytes: Vec<u8> = (0..32).collect();
    let dims = Dims::new(9, 5).unwrap();
    let art = render::render(&bytes, "a very long caption indeed", "x", dims).unwrap();
    let expected = "\
┏[a very ]┓
┃^^OXOE.  ┃
┃%XO=+ .  ┃
┃o+..S.   ┃
┃         ┃
┃         ┃
┗━━━[x]━━━┛";
    assert_eq!(art, expected);
    assert_shape(&art, dims);
}

#[test]
fn render_is_deterministic() {
    let bytes: Vec<u8> = (0..64).map(|i: u32| (i * 131 % 251) as u8).collect();
    assert_eq!(default_art(&bytes), default_art(&bytes));
}

#[test]
fn shape_holds_for_many_inputs_and_sizes() {
    for (w, h) in [(3, 3), (5, 7), (17, 9), (21, 11), (33, 17)] {
        let dims = Dims::new(w, h).unwrap();
        for seed in 0u8..16 {
            let bytes: Vec<u8> = (0..seed as usize * 3).map(|i| seed ^ i as u8).collect();
            let art = render::render(&bytes, "ECDSA 256", "SHA256", dims).unwrap();
            assert_shape(&art, dims);

            let lines: Vec<&str> = art.lines().collect();
            let body = lines[1..lines.len() - 1].concat();
            assert_eq!(body.matches('E').count(), 1, "exactly one end marker");
            assert!(body.matches('S').count() <= 1);
        }
    }
}

#[test]
fn path_starts_at_center_and_has_one_entry_per_pair() {
    let bytes: Vec<u8> = (0..=255).collect();
    for (w, h) in [(3, 3), (17, 9), (9, 15)] {
        let dims = Dims::new(w, h).unwrap();
        let pairs = bit_pairs(&bytes);
        let path = walk(&pairs, dims).unwrap();
        assert_eq!(path.len(), pairs.len() + 1);
        assert_eq!((path[0].x, path[0].y), (w / 2, h / 2));
    }
}

#[test]
fn invalid_dims_fail_before_rendering() {
    let err = render::render(&[1, 2, 3], "k", "h", Dims { width: 3, height: 1 }).unwrap_err();
    assert_eq!(err, ArtError::InvalidDims { width: 3, height: 1 });
    assert_eq!(
        err.to_string(),
        "grid dimensions 3x1 must both be odd and at least 3"
    );
}

#[test]
fn ascii_charset_draws_plain_border() {
    let renderer = Renderer::new(RendererConfig {
        charset: Charset::ascii(),
        ..RendererConfig::default()
    })
    .unwrap();
    let art = renderer.render(&[0x00], DEFAULT_KEY_NAME, DEFAULT_HASH_NAME);
    let lines: Vec<&str> = art.lines().collect();
    assert_eq!(lines[0], "+----[RSA 4096]---+");
    assert_eq!(lines[1], "|    E            |");
    assert_eq!(lines[5], "|        S        |");
    assert_eq!(lines[10], "+-----[SHA256]----+");
}

#[test]
fn crate_root_render_rejects_degenerate_grid() {
    let err = randomart::render(&[0xFF], "k", "h", Dims { width: 1, height: 3 }).unwrap_err();
    assert_eq!(err, ArtError::InvalidDims { width: 1, height: 3 });

    let art = randomart::render(&[0x00], DEFAULT_KEY_NAME, DEFAULT_HASH_NAME, Dims::default());
    assert_eq!(art.unwrap(), default_art(&[0x00]));
}

#[test]
fn renderer_exposes_visit_counts() {
    let renderer = Renderer::new(RendererConfig::default()).unwrap();
    let mut bytes = vec![0x00; 8];
    bytes.push(0xFF);
    let (hist, end) = renderer.histogram(&bytes);
    assert_eq!(hist.count(Position::new(0, 0)), Some(25));
    assert_eq!(hist.count(Position::new(17, 0)), None);
    assert_eq!(end, Position::new(4, 4));
    assert_eq!(hist.total(), bytes.len() * 4 + 1);
}
