//! EAN-13 / UPC-A decoding on horizontal scanlines.
//!
//! Each candidate row is binarized around the midpoint of its darkest and
//! lightest pixels, run-length encoded, and matched against the 59-run
//! layout of an EAN-13 symbol: start guard (3), six left digits (4 each),
//! middle guard (5), six right digits (4 each), end guard (3).
//!
//! A candidate must keep one module width across the whole symbol, sit
//! between two quiet zones, and be read the same way on at least two rows
//! before it is reported.

use std::collections::HashMap;

use image::GrayImage;

/// Runs in a full symbol, from the first start-guard bar to the last end-guard bar.
const SYMBOL_RUNS: usize = 59;
/// Narrowest row that can hold the 95 modules of a symbol.
const MIN_ROW_WIDTH: u32 = 95;
/// Rows whose darkest and lightest pixels differ by less than this are skipped.
const MIN_CONTRAST: u8 = 40;
/// Modules from the first start-guard bar to the last end-guard bar.
const SYMBOL_MODULES: f64 = 95.0;
/// Modules covered by one digit.
const DIGIT_MODULES: f64 = 7.0;
/// Quiet zone on each side of the symbol, in modules.
const MIN_QUIET_MODULES: f64 = 3.0;
/// Allowed relative deviation of a guard or digit from its nominal width.
const WIDTH_TOLERANCE: f64 = 0.25;
/// Largest accepted distance between a measured digit and its pattern, in modules.
const MAX_DIGIT_ERROR: f64 = 1.0;
/// Rows that must decode to the same digits when the image has that many.
const MIN_AGREEING_ROWS: usize = 2;

/// Space/bar widths of the L-code digits (left half, odd parity). Right-half
/// (R-code) digits use the same widths starting with a bar; G-code digits are
/// the L widths reversed.
const L_WIDTHS: [[u8; 4]; 10] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
];

/// Parity of the six left digits, indexed by the implied first digit.
const FIRST_DIGIT_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Parity {
    L,
    G,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    dark: bool,
    width: usize,
}

/// Scans the image for an EAN-13 symbol, reading rows from the middle
/// outwards and each row in both directions. The first code read on
/// [`MIN_AGREEING_ROWS`] rows wins; a single-row image needs one.
pub fn scan(image: &GrayImage) -> Option<String> {
    let (width, height) = image.dimensions();
    if width < MIN_ROW_WIDTH || height == 0 {
        return None;
    }

    let rows = scan_rows(height);
    let required = MIN_AGREEING_ROWS.min(rows.len());
    let mut votes: HashMap<String, usize> = HashMap::new();

    for y in rows {
        let mut row: Vec<u8> = (0..width).map(|x| image.get_pixel(x, y).0[0]).collect();
        let code = decode_row(&row).or_else(|| {
            row.reverse();
            decode_row(&row)
        });
        if let Some(code) = code {
            let count = votes.entry(code.clone()).or_insert(0);
            *count += 1;
            if *count >= required {
                return Some(code);
            }
        }
    }
    None
}

/// Row indices starting at the middle and alternating outwards.
fn scan_rows(height: u32) -> Vec<u32> {
    let middle = height / 2;
    let step = (height / 24).max(1);
    let mut rows = vec![middle];
    let mut offset = step;
    while offset <= middle || middle + offset < height {
        if middle + offset < height {
            rows.push(middle + offset);
        }
        if offset <= middle {
            rows.push(middle - offset);
        }
        offset += step;
    }
    rows
}

/// Decodes one row of grayscale pixels, returning the 13 digits on success.
pub fn decode_row(row: &[u8]) -> Option<String> {
    let min = *row.iter().min()?;
    let max = *row.iter().max()?;
    if max - min < MIN_CONTRAST {
        return None;
    }
    let threshold = (u16::from(min) + u16::from(max)) / 2;

    // Both quiet zones must be inside the row.
    let runs = run_lengths(row, threshold);
    if runs.len() < SYMBOL_RUNS + 2 {
        return None;
    }

    (1..runs.len() - SYMBOL_RUNS)
        .filter(|&i| runs[i].dark && !runs[i - 1].dark)
        .find_map(|i| {
            decode_symbol(
                &runs[i..i + SYMBOL_RUNS],
                runs[i - 1].width,
                runs[i + SYMBOL_RUNS].width,
            )
        })
}

fn run_lengths(row: &[u8], threshold: u16) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &pixel in row {
        let dark = u16::from(pixel) < threshold;
        match runs.last_mut() {
            Some(run) if run.dark == dark => run.width += 1,
            _ => runs.push(Run { dark, width: 1 }),
        }
    }
    runs
}

fn decode_symbol(runs: &[Run], leading_quiet: usize, trailing_quiet: usize) -> Option<String> {
    let widths: Vec<usize> = runs.iter().map(|r| r.width).collect();

    let module = widths.iter().sum::<usize>() as f64 / SYMBOL_MODULES;
    let guard_module = widths[0..3].iter().sum::<usize>() as f64 / 3.0;
    if !within_tolerance(guard_module, module)
        || !is_guard(&widths[0..3], module)
        || !is_guard(&widths[27..32], module)
        || !is_guard(&widths[56..59], module)
        || (leading_quiet as f64) < MIN_QUIET_MODULES * module
        || (trailing_quiet as f64) < MIN_QUIET_MODULES * module
    {
        return None;
    }

    let mut digits = Vec::with_capacity(13);
    let mut parity = String::with_capacity(6);

    for chunk in widths[3..27].chunks(4) {
        let (digit, p) = match_digit(chunk, module, true)?;
        digits.push(digit);
        parity.push(if p == Parity::L { 'L' } else { 'G' });
    }
    for chunk in widths[32..56].chunks(4) {
        let (digit, _) = match_digit(chunk, module, false)?;
        digits.push(digit);
    }

    let first = FIRST_DIGIT_PARITY.iter().position(|p| *p == parity)? as u8;
    digits.insert(0, first);

    if !has_valid_check_digit(&digits) {
        return None;
    }

    Some(digits.iter().map(|d| char::from(b'0' + d)).collect())
}

fn within_tolerance(measured: f64, nominal: f64) -> bool {
    (measured - nominal).abs() <= WIDTH_TOLERANCE * nominal
}

fn is_guard(widths: &[usize], module: f64) -> bool {
    widths
        .iter()
        .all(|&w| (w as f64) >= 0.5 * module && (w as f64) <= 1.5 * module)
}

/// Matches four run widths against the digit patterns. Left-half digits may
/// be L or G coded; right-half digits only use the L widths. The group must
/// span seven modules of the symbol's width.
fn match_digit(widths: &[usize], module: f64, left_half: bool) -> Option<(u8, Parity)> {
    let total: usize = widths.iter().sum();
    if total == 0 || !within_tolerance(total as f64, DIGIT_MODULES * module) {
        return None;
    }
    let scale = DIGIT_MODULES / total as f64;
    let measured: Vec<f64> = widths.iter().map(|&w| w as f64 * scale).collect();

    let distance = |pattern: [u8; 4]| -> f64 {
        measured
            .iter()
            .zip(pattern.iter())
            .map(|(m, &p)| (m - f64::from(p)).abs())
            .sum()
    };

    let mut best: Option<(f64, u8, Parity)> = None;
    for (digit, pattern) in L_WIDTHS.iter().enumerate() {
        let mut candidates = vec![(distance(*pattern), Parity::L)];
        if left_half {
            let mut reversed = *pattern;
            reversed.reverse();
            candidates.push((distance(reversed), Parity::G));
        }
        for (error, parity) in candidates {
            if best.is_none_or(|(e, _, _)| error < e) {
                best = Some((error, digit as u8, parity));
            }
        }
    }

    best.filter(|(error, _, _)| *error < MAX_DIGIT_ERROR)
        .map(|(_, digit, parity)| (digit, parity))
}

/// Weights 1 and 3 alternate over the first twelve digits.
pub fn has_valid_check_digit(digits: &[u8]) -> bool {
    if digits.len() != 13 {
        return false;
    }
    let sum: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    (10 - sum % 10) % 10 == u32::from(digits[12])
}

#[cfg(test)]
pub(crate) mod test_support {
    use image::{GrayImage, Luma};

    const L_BITS: [&str; 10] = [
        "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
        "0110111", "0001011",
    ];

    fn r_bits(digit: usize) -> String {
        L_BITS[digit]
            .chars()
            .map(|c| if c == '0' { '1' } else { '0' })
            .collect()
    }

    fn g_bits(digit: usize) -> String {
        r_bits(digit).chars().rev().collect()
    }

    /// Module string ('1' = bar) of a 13-digit code, guards included.
    pub fn ean13_modules(code: &str) -> String {
        let digits: Vec<usize> = code
            .chars()
            .map(|c| c.to_digit(10).unwrap() as usize)
            .collect();
        let parity = super::FIRST_DIGIT_PARITY[digits[0]];

        let mut bits = String::from("101");
        for (i, p) in parity.chars().enumerate() {
            let d = digits[i + 1];
            bits.push_str(&if p == 'L' { L_BITS[d].to_string() } else { g_bits(d) });
        }
        bits.push_str("01010");
        for &d in &digits[7..13] {
            bits.push_str(&r_bits(d));
        }
        bits.push_str("101");
        bits
    }

    /// Renders an ideal symbol with a 10-module quiet zone on each side.
    pub fn render_ean13(code: &str, module_px: u32, height: u32) -> GrayImage {
        let modules = ean13_modules(code);
        let quiet = 10;
        let width = (modules.len() as u32 + 2 * quiet) * module_px;
        let mut img = GrayImage::from_pixel(width, height, Luma([255]));
        for (i, bit) in modules.chars().enumerate() {
            if bit == '1' {
                let x0 = (quiet + i as u32) * module_px;
                for x in x0..x0 + module_px {
                    for y in 0..height {
                        img.put_pixel(x, y, Luma([0]));
                    }
                }
            }
        }
        img
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{ean13_modules, render_ean13};
    use super::*;
    use image::Luma;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// One scanline of `code` with 12 light modules on each side, where
    /// module `i` of the symbol is `px(i)` pixels wide.
    fn scanline(code: &str, px: impl Fn(usize) -> usize) -> Vec<u8> {
        let mut row = vec![255u8; 12 * px(0)];
        for (i, bit) in ean13_modules(code).chars().enumerate() {
            let value = if bit == '1' { 0 } else { 255 };
            row.extend(std::iter::repeat_n(value, px(i)));
        }
        row.extend(std::iter::repeat_n(255u8, 12 * px(0)));
        row
    }

    #[test]
    fn should_render_95_modules() {
        assert_eq!(ean13_modules("5901234123457").len(), 95);
    }

    #[test]
    fn should_decode_ideal_symbol() {
        let img = render_ean13("5901234123457", 2, 30);
        assert_eq!(scan(&img).as_deref(), Some("5901234123457"));
    }

    #[test]
    fn should_decode_every_first_digit_parity() {
        for code in [
            "0036000291452",
            "1234567890128",
            "2000000000008",
            "3000000000007",
            "4006381333931",
            "5901234123457",
            "6000000000004",
            "7622210449283",
            "8901234567890",
            "9780201379624",
        ] {
            let img = render_ean13(code, 3, 20);
            assert_eq!(scan(&img).as_deref(), Some(code), "code {}", code);
        }
    }

    #[test]
    fn should_decode_symbol_rotated_half_turn() {
        let img = image::imageops::rotate180(&render_ean13("4006381333931", 2, 20));
        assert_eq!(scan(&img).as_deref(), Some("4006381333931"));
    }

    #[test]
    fn should_decode_with_grey_levels_and_uneven_module_width() {
        let img = render_ean13("5901234123457", 3, 12);
        let washed = GrayImage::from_fn(img.width(), img.height(), |x, y| {
            if img.get_pixel(x, y).0[0] == 0 {
                Luma([70])
            } else {
                Luma([190])
            }
        });
        assert_eq!(scan(&washed).as_deref(), Some("5901234123457"));
    }

    #[test]
    fn should_reject_symbol_with_wrong_check_digit() {
        let img = render_ean13("5901234123458", 2, 10);
        assert!(scan(&img).is_none());
    }

    #[test]
    fn should_return_none_for_blank_image() {
        let img = GrayImage::from_pixel(300, 50, Luma([255]));
        assert!(scan(&img).is_none());
    }

    #[test]
    fn should_return_none_for_image_too_narrow() {
        let img = GrayImage::from_pixel(40, 40, Luma([0]));
        assert!(scan(&img).is_none());
    }

    #[test]
    fn should_validate_check_digit() {
        assert!(has_valid_check_digit(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5, 7]));
        assert!(!has_valid_check_digit(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5, 8]));
        assert!(!has_valid_check_digit(&[1, 2, 3]));
    }

    #[test]
    fn should_visit_middle_row_first_and_every_row_once() {
        let rows = scan_rows(10);
        assert_eq!(rows[0], 5);
        let mut sorted = rows.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), rows.len());
        assert!(rows.iter().all(|&r| r < 10));
        assert_eq!(rows.len(), 10);
    }

    #[test]
    fn should_reject_symbol_without_trailing_quiet_zone() {
        let img = render_ean13("5901234123457", 2, 20);
        // The quiet zone is 10 modules of 2 px; cut it off on the right.
        let cropped = image::imageops::crop_imm(&img, 0, 0, img.width() - 20, 20).to_image();

        assert!(scan(&cropped).is_none());
    }

    #[test]
    fn should_reject_digit_group_wider_than_seven_modules() {
        let even = scanline("5901234123457", |_| 4);
        assert_eq!(decode_row(&even).as_deref(), Some("5901234123457"));

        // Second digit (modules 3..10) keeps its proportions but is 1.5x wide.
        let stretched = scanline("5901234123457", |i| if (3..10).contains(&i) { 6 } else { 4 });
        assert!(decode_row(&stretched).is_none());
    }

    #[test]
    fn should_require_two_rows_to_agree_on_tall_images() {
        let symbol = render_ean13("5901234123457", 2, 1);
        let mut img = GrayImage::from_pixel(symbol.width(), 9, Luma([255]));
        image::imageops::replace(&mut img, &symbol, 0, 4);
        assert!(scan(&img).is_none());

        image::imageops::replace(&mut img, &symbol, 0, 5);
        assert_eq!(scan(&img).as_deref(), Some("5901234123457"));
    }

    #[test]
    fn should_read_single_row_image() {
        let img = render_ean13("4006381333931", 2, 1);
        assert_eq!(scan(&img).as_deref(), Some("4006381333931"));
    }

    #[test]
    fn should_not_read_codes_from_random_black_and_white_rows() {
        let mut rng = StdRng::seed_from_u64(0x5eed_0001);
        for _ in 0..2_000 {
            let row: Vec<u8> = (0..400)
                .map(|_| if rng.random_bool(0.5) { 0 } else { 255 })
                .collect();
            assert_eq!(decode_row(&row), None);
        }
    }

    #[test]
    fn should_not_read_codes_from_random_noise_images() {
        let mut rng = StdRng::seed_from_u64(0x5eed_0002);
        for _ in 0..200 {
            let img = GrayImage::from_fn(640, 240, |_, _| {
                Luma([if rng.random_bool(0.5) { 0 } else { 255 }])
            });
            assert_eq!(scan(&img), None);
        }
    }
}
