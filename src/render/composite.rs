use crate::foundation::error::{ChromeError, ChromeResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Scale a premultiplied pixel by an 8-bit coverage weight.
pub fn weighted(px: PremulRgba8, weight: u8) -> PremulRgba8 {
    if weight == 255 {
        return px;
    }
    let w = u16::from(weight);
    px.map(|c| mul_div255_u8(u16::from(c), w))
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> ChromeResult<()> {
    check_lengths(dst.len(), &[src.len()], "over_in_place")?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Source-over of `src` restricted to the alpha coverage of `mask`.
pub fn masked_over_in_place(
    dst: &mut [u8],
    src: &[u8],
    mask: &[u8],
    opacity: f32,
) -> ChromeResult<()> {
    check_lengths(dst.len(), &[src.len(), mask.len()], "masked_over_in_place")?;
    for ((d, s), m) in dst
        .chunks_exact_mut(4)
        .zip(src.chunks_exact(4))
        .zip(mask.chunks_exact(4))
    {
        if m[3] == 0 {
            continue;
        }
        let s = weighted([s[0], s[1], s[2], s[3]], m[3]);
        let out = over([d[0], d[1], d[2], d[3]], s, opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Source-over of `src` outside the alpha coverage of `mask`.
pub fn masked_out_in_place(
    dst: &mut [u8],
    src: &[u8],
    mask: &[u8],
    opacity: f32,
) -> ChromeResult<()> {
    check_lengths(dst.len(), &[src.len(), mask.len()], "masked_out_in_place")?;
    for ((d, s), m) in dst
        .chunks_exact_mut(4)
        .zip(src.chunks_exact(4))
        .zip(mask.chunks_exact(4))
    {
        if m[3] == 255 {
            continue;
        }
        let s = weighted([s[0], s[1], s[2], s[3]], 255 - m[3]);
        let out = over([d[0], d[1], d[2], d[3]], s, opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn check_lengths(dst: usize, others: &[usize], what: &str) -> ChromeResult<()> {
    if !dst.is_multiple_of(4) || others.iter().any(|&len| len != dst) {
        return Err(ChromeError::render(format!(
            "{what} expects equal-length rgba8 buffers"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
