//! 统计用数值工具
//!
//! 四分位数取排序后下标 `floor(n * p)` 处的值（不插值），
//! 中位数取下标 `floor(n / 2)`（偶数个时取上中位数）。

/// 比率；分母为 0 时返回 0
pub fn rate(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// 算术平均；空样本为 0
pub fn mean(values: &[i64]) -> f64 {
    rate(values.iter().sum::<i64>() as f64, values.len() as f64)
}

/// 上中位数，输入须已升序排列
pub fn upper_median(sorted: &[i64]) -> Option<i64> {
    sorted.get(sorted.len() / 2).copied()
}

/// 总体标准差（除以 n）
pub fn population_std_dev(values: &[i64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = values
        .iter()
        .map(|&value| (value as f64 - mean).powi(2))
        .sum();
    (sum_of_squares / values.len() as f64).sqrt()
}

/// 下四分位与上四分位
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileBounds {
    pub lower: f64,
    pub upper: f64,
}

impl QuartileBounds {
    /// 输入须已升序排列；空样本返回 None
    pub fn from_sorted(sorted: &[i64]) -> Option<Self> {
        let n = sorted.len();
        if n == 0 {
            return None;
        }
        let lower_index = (n as f64 * 0.25).floor() as usize;
        let upper_index = ((n as f64 * 0.75).floor() as usize).min(n - 1);
        Some(Self {
            lower: sorted[lower_index] as f64,
            upper: sorted[upper_index] as f64,
        })
    }

    pub fn interquartile_distance(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Tukey 离群值边界
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierFences {
    pub lower: f64,
    pub upper: f64,
}

impl OutlierFences {
    pub const TUKEY_FACTOR: f64 = 1.5;

    /// 以给定四分位距构造边界，四分位距可来自其他样本
    pub fn tukey(quartiles: QuartileBounds, interquartile_distance: f64) -> Self {
        Self {
            lower: quartiles.lower - Self::TUKEY_FACTOR * interquartile_distance,
            upper: quartiles.upper + Self::TUKEY_FACTOR * interquartile_distance,
        }
    }

    /// 先从尾部去掉大于上界的值，再从头部去掉小于下界的值
    pub fn trim<'a>(&self, sorted: &'a [i64]) -> &'a [i64] {
        let mut end = sorted.len();
        while end > 0 && sorted[end - 1] as f64 > self.upper {
            end -= 1;
        }
        let mut start = 0;
        while start < end && (sorted[start] as f64) < self.lower {
            start += 1;
        }
        &sorted[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartiles_are_index_based() {
        let sorted = [10, 20, 30, 40, 1000];
        let quartiles = QuartileBounds::from_sorted(&sorted).unwrap();
        assert_eq!(quartiles.lower, 20.0);
        assert_eq!(quartiles.upper, 40.0);
        assert_eq!(quartiles.interquartile_distance(), 20.0);
        assert!(QuartileBounds::from_sorted(&[]).is_none());
    }

    #[test]
    fn test_tukey_trim_drops_high_outlier() {
        let sorted = [10, 20, 30, 40, 1000];
        let quartiles = QuartileBounds::from_sorted(&sorted).unwrap();
        let fences = OutlierFences::tukey(quartiles, quartiles.interquartile_distance());
        assert_eq!(fences.lower, -10.0);
        assert_eq!(fences.upper, 70.0);

        let trimmed = fences.trim(&sorted);
        assert_eq!(trimmed, &[10, 20, 30, 40]);
        assert_eq!(mean(trimmed), 25.0);
    }

    #[test]
    fn test_trim_drops_low_outliers() {
        let fences = OutlierFences {
            lower: 5.0,
            upper: 100.0,
        };
        assert_eq!(fences.trim(&[1, 2, 5, 9, 100]), &[5, 9, 100]);
        assert!(fences.trim(&[1, 2]).is_empty());
    }

    #[test]
    fn test_trim_is_idempotent() {
        let sorted = [-500, 3, 4, 5, 6, 7, 8, 900];
        let quartiles = QuartileBounds::from_sorted(&sorted).unwrap();
        let fences = OutlierFences::tukey(quartiles, quartiles.interquartile_distance());
        let once = fences.trim(&sorted);
        let twice = fences.trim(once);
        assert_eq!(once, twice);
        assert_eq!(once, &[3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_upper_median() {
        assert_eq!(upper_median(&[5, 15, 25]), Some(15));
        assert_eq!(upper_median(&[5, 15, 25, 35]), Some(25));
        assert_eq!(upper_median(&[]), None);
    }

    #[test]
    fn test_population_std_dev() {
        let values = [10, 20, 30];
        let std_dev = population_std_dev(&values, mean(&values));
        assert!((std_dev - (200.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert!((std_dev - 8.165).abs() < 1e-3);
        assert_eq!(population_std_dev(&[], 0.0), 0.0);
    }

    #[test]
    fn test_rate_guards_zero_denominator() {
        assert_eq!(rate(3.0, 0.0), 0.0);
        assert_eq!(rate(20.0 / 2.0, 10.0), 1.0);
    }
}
