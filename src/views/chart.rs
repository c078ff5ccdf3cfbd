/// 입찰 분포 차트
// region:    --- Imports
use crate::stats::{bid_distribution, BucketCount};

// endregion: --- Imports

// region:    --- Bid Chart

/// 텍스트 막대 차트. 상세 뷰가 인스턴스 하나를 소유하며,
/// 갱신 시 이전 인스턴스를 폐기한 뒤 새로 만든다.
pub struct BidChart {
    buckets: Vec<BucketCount>,
}

impl BidChart {
    pub fn build(amounts: &[f64]) -> Self {
        Self {
            buckets: bid_distribution(amounts),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self) -> &[BucketCount] {
        &self.buckets
    }

    pub fn render(&self) -> String {
        let label_width = self
            .buckets
            .iter()
            .map(|bucket| bucket.label.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for bucket in &self.buckets {
            out.push_str(&format!(
                "{:>width$} | {} {}\n",
                bucket.label,
                "#".repeat(bucket.count),
                bucket.count,
                width = label_width
            ));
        }
        out
    }
}

// endregion: --- Bid Chart

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_row_per_occupied_bucket() {
        let chart = BidChart::build(&[12.0, 19.0, 25.0]);
        let rendered = chart.render();
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("$10-20"));
        assert!(rows[0].contains("## 2"));
        assert!(rows[1].contains("$20-30"));
        assert!(rows[1].contains("# 1"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        let chart = BidChart::build(&[]);
        assert!(chart.is_empty());
        assert_eq!(chart.render(), "");
    }
}
