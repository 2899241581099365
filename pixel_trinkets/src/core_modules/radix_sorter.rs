// THEORY:
// The `RadixSorter` orders a sequence of fixed-length color tuples
// lexicographically, channel 0 first, using a least-significant-digit radix sort
// where one digit is one whole channel.
//
// Algorithm:
// 1.  **Validate**: Every channel value must be within `0..=max_value`. This is
//     checked before anything moves, so a bad input never yields partial output.
// 2.  **Passes, last channel first**: Each pass is a counting sort on one channel:
//     histogram the channel values, turn the histogram into bucket start offsets
//     (exclusive prefix sum), then scatter every item to its bucket's next slot in
//     input order. Scattering in input order is what makes the pass stable, and
//     stability is what lets the next (more significant) pass keep the order the
//     previous passes established. After the channel-0 pass the whole tuple is
//     sorted.
// 3.  **Reused storage**: One counts array of `max_value + 1` entries and one
//     scratch vector are allocated per sort and ping-ponged across passes.
// 4.  **Skipped passes**: When every item lands in the same bucket, a stable pass
//     would not move anything, so it is skipped.
//
// With the `parallel` feature, large inputs build per-partition histograms on the
// rayon pool. Offsets are then assigned bucket-major, partition-minor, and the
// scatter walks partitions in order, so every bucket keeps exactly the relative
// order a sequential pass would give it.

use crate::core_modules::pixel::pixel::{Channel, Pixel};
use crate::error::TrinketError;

/// Inputs smaller than this are always sorted with sequential passes.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 1 << 16;

/// LSD radix sorter for fixed-length 8-bit tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixSorter {
    max_value: Channel,
}

impl Default for RadixSorter {
    fn default() -> Self {
        Self::new(Channel::MAX)
    }
}

impl RadixSorter {
    /// A sorter that accepts channel values in `0..=max_value`.
    pub const fn new(max_value: Channel) -> Self {
        Self { max_value }
    }

    pub fn max_value(&self) -> Channel {
        self.max_value
    }

    /// Number of buckets per pass.
    pub fn radix(&self) -> usize {
        self.max_value as usize + 1
    }

    /// Checks every channel against `max_value`, reporting the first offender.
    pub fn validate<const C: usize>(&self, pixels: &[Pixel<C>]) -> Result<(), TrinketError> {
        for (index, pixel) in pixels.iter().enumerate() {
            if pixel.max_channel() <= self.max_value {
                continue;
            }
            if let Some((channel, &value)) =
                pixel.0.iter().enumerate().find(|&(_, &value)| value > self.max_value)
            {
                return Err(TrinketError::OutOfRange {
                    index,
                    channel,
                    value,
                    max: self.max_value,
                });
            }
        }
        Ok(())
    }

    /// Returns a sorted copy of `pixels`.
    pub fn sort<const C: usize>(&self, pixels: &[Pixel<C>]) -> Result<Vec<Pixel<C>>, TrinketError> {
        self.validate(pixels)?;
        Ok(self.sort_validated(pixels.to_vec()))
    }

    /// Like [`RadixSorter::sort`], but takes ownership and reuses the allocation.
    pub fn sort_vec<const C: usize>(
        &self,
        pixels: Vec<Pixel<C>>,
    ) -> Result<Vec<Pixel<C>>, TrinketError> {
        self.validate(&pixels)?;
        Ok(self.sort_validated(pixels))
    }

    fn sort_validated<const C: usize>(&self, mut items: Vec<Pixel<C>>) -> Vec<Pixel<C>> {
        if items.len() < 2 {
            return items;
        }

        let mut scratch = vec![Pixel::default(); items.len()];
        let mut counts = vec![0usize; self.radix()];

        for channel in (0..C).rev() {
            if self.pass(channel, &items, &mut scratch, &mut counts) {
                std::mem::swap(&mut items, &mut scratch);
            }
        }

        items
    }

    /// One stable counting pass on `channel`. Returns false if the pass was skipped
    /// and `destination` was left untouched.
    fn pass<const C: usize>(
        &self,
        channel: usize,
        source: &[Pixel<C>],
        destination: &mut [Pixel<C>],
        counts: &mut [usize],
    ) -> bool {
        #[cfg(feature = "parallel")]
        {
            if source.len() >= PARALLEL_THRESHOLD {
                let partitions = num_cpus::get().max(1);
                return self.partitioned_pass(channel, source, destination, partitions);
            }
        }

        sequential_pass(channel, source, destination, counts)
    }

    #[cfg(feature = "parallel")]
    fn partitioned_pass<const C: usize>(
        &self,
        channel: usize,
        source: &[Pixel<C>],
        destination: &mut [Pixel<C>],
        partitions: usize,
    ) -> bool {
        use rayon::prelude::*;

        let radix = self.radix();
        let partition_len = source.len().div_ceil(partitions.max(1)).max(1);

        let mut histograms: Vec<Vec<usize>> = source
            .par_chunks(partition_len)
            .map(|partition| {
                let mut histogram = vec![0usize; radix];
                for pixel in partition {
                    histogram[pixel.0[channel] as usize] += 1;
                }
                histogram
            })
            .collect();

        let single_bucket = (0..radix)
            .any(|bucket| histograms.iter().map(|h| h[bucket]).sum::<usize>() == source.len());
        if single_bucket {
            return false;
        }

        // Bucket-major, partition-minor: earlier partitions fill a bucket first.
        let mut next = 0usize;
        for bucket in 0..radix {
            for histogram in histograms.iter_mut() {
                let count = histogram[bucket];
                histogram[bucket] = next;
                next += count;
            }
        }

        for (partition, offsets) in source.chunks(partition_len).zip(histograms.iter_mut()) {
            for pixel in partition {
                let bucket = pixel.0[channel] as usize;
                destination[offsets[bucket]] = *pixel;
                offsets[bucket] += 1;
            }
        }

        true
    }
}

/// Counting sort of `source` on `channel` into `destination`, stable.
///
/// `counts` must have one entry per bucket; its contents are overwritten.
fn sequential_pass<const C: usize>(
    channel: usize,
    source: &[Pixel<C>],
    destination: &mut [Pixel<C>],
    counts: &mut [usize],
) -> bool {
    counts.fill(0);
    for pixel in source {
        counts[pixel.0[channel] as usize] += 1;
    }

    if counts.iter().any(|&count| count == source.len()) {
        return false;
    }

    let mut next = 0usize;
    for count in counts.iter_mut() {
        let bucket_len = *count;
        *count = next;
        next += bucket_len;
    }

    for pixel in source {
        let bucket = pixel.0[channel] as usize;
        destination[counts[bucket]] = *pixel;
        counts[bucket] += 1;
    }

    true
}
