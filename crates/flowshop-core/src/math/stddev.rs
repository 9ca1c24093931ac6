// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::collections::VecDeque;

/// A fixed-capacity sliding window over `f64` samples reporting the
/// population standard deviation of its contents.
///
/// The deviation is only defined once the window has filled; before that,
/// [`SlidingStdDev::population_std_dev`] returns `None`. Pushing into a
/// full window evicts the oldest sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingStdDev {
    capacity: usize,
    window: VecDeque<f64>,
}

/// Error type for a zero-capacity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWindowError;

impl std::fmt::Display for InvalidWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The window capacity must be at least 1.")
    }
}

impl std::error::Error for InvalidWindowError {}

impl SlidingStdDev {
    #[inline]
    pub fn new(capacity: usize) -> Result<Self, InvalidWindowError> {
        if capacity == 0 {
            return Err(InvalidWindowError);
        }
        Ok(Self {
            capacity,
            window: VecDeque::with_capacity(capacity),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.window.len() == self.capacity
    }

    #[inline]
    pub fn push(&mut self, sample: f64) {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(sample);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Population standard deviation of the window contents, or `None`
    /// while the window is still filling.
    pub fn population_std_dev(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }
        let n = self.window.len() as f64;
        let mean = self.window.iter().sum::<f64>() / n;
        let variance = self
            .window
            .iter()
            .map(|x| {
                let d = x - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        Some(variance.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(SlidingStdDev::new(0).unwrap_err(), InvalidWindowError);
    }

    #[test]
    fn test_undefined_until_full() {
        let mut sd = SlidingStdDev::new(3).unwrap();
        assert!(sd.population_std_dev().is_none());
        sd.push(1.0);
        sd.push(2.0);
        assert!(sd.population_std_dev().is_none());
        sd.push(3.0);
        assert!(sd.population_std_dev().is_some());
    }

    #[test]
    fn test_constant_samples_have_zero_deviation() {
        let mut sd = SlidingStdDev::new(4).unwrap();
        for _ in 0..4 {
            sd.push(42.0);
        }
        assert_eq!(sd.population_std_dev(), Some(0.0));
    }

    #[test]
    fn test_known_population_deviation() {
        // Population SD of {2, 4, 4, 4, 5, 5, 7, 9} is exactly 2.
        let mut sd = SlidingStdDev::new(8).unwrap();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            sd.push(v);
        }
        let dev = sd.population_std_dev().unwrap();
        assert!((dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_slides() {
        let mut sd = SlidingStdDev::new(2).unwrap();
        sd.push(0.0);
        sd.push(100.0);
        assert!(sd.population_std_dev().unwrap() > 1.0);

        // Once the noisy sample leaves the window the plateau shows.
        sd.push(100.0);
        assert_eq!(sd.population_std_dev(), Some(0.0));
        assert_eq!(sd.len(), 2);
    }

    #[test]
    fn test_clear_resets_fill_state() {
        let mut sd = SlidingStdDev::new(2).unwrap();
        sd.push(1.0);
        sd.push(2.0);
        sd.clear();
        assert!(sd.is_empty());
        assert!(sd.population_std_dev().is_none());
    }
}
