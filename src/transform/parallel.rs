//! Run independent row-range work over a row-major pixel buffer.
//!
//! With the `threads` feature the buffer is split into contiguous bands of
//! whole rows, each handed to a scoped thread; all threads are joined before
//! returning. Without it the whole buffer is one band.

use crate::pixel::Pixel;

/// Call `work(first_row, band)` over bands of `buf` that cover it exactly.
///
/// Every band except the last holds a multiple of `align` rows, so work
/// partitioned into `align`-row tiles never straddles two bands.
#[cfg(not(feature = "threads"))]
pub(crate) fn for_each_row_band<F>(buf: &mut [Pixel], _width: usize, _align: usize, work: F)
where
    F: Fn(usize, &mut [Pixel]) + Sync,
{
    log::trace!("Running row bands in single threaded mode");
    work(0, buf);
}

#[cfg(feature = "threads")]
pub(crate) fn for_each_row_band<F>(buf: &mut [Pixel], width: usize, align: usize, work: F)
where
    F: Fn(usize, &mut [Pixel]) + Sync,
{
    let height = buf.len() / width.max(1);
    let align = align.max(1);
    let threads = std::thread::available_parallelism().map_or(1, |n| n.get());
    let units = height.div_ceil(align);

    if threads < 2 || units < 2 {
        log::trace!("Running row bands in single threaded mode");
        work(0, buf);
        return;
    }

    let band_rows = units.div_ceil(threads).saturating_mul(align);
    log::trace!("Running row bands on threads, {band_rows} rows per band");

    let work = &work;
    std::thread::scope(|s| {
        for (band, pixels) in buf.chunks_mut(band_rows.saturating_mul(width)).enumerate() {
            s.spawn(move || work(band * band_rows, pixels));
        }
    });
}
