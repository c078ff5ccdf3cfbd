/// 클라이언트측 입찰 집계
/// 1. 차트용 금액 분포 버킷
/// 2. 상위 입찰자 랭킹
// region:    --- Imports
use crate::auction::model::AuctionBid;
use std::collections::{BTreeMap, HashMap};

// endregion: --- Imports

// region:    --- Bid Distribution

/// 랭킹 표시 상한
pub const RANKING_LIMIT: usize = 10;

/// 버킷당 입찰 수
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCount {
    pub label: String,
    pub count: usize,
}

/// 입찰 금액 분포 집계: bucket = floor(amount / 10) * 10.
/// 입찰이 없는 버킷은 생성하지 않으며, 버킷 숫자값 오름차순으로 반환한다.
pub fn bid_distribution(amounts: &[f64]) -> Vec<BucketCount> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &amount in amounts {
        let bucket = (amount / 10.0).floor() as i64 * 10;
        *counts.entry(bucket).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(bucket, count)| BucketCount {
            label: format!("${}-{}", bucket, bucket + 10),
            count,
        })
        .collect()
}

// endregion: --- Bid Distribution

// region:    --- Top Bidders

/// 랭킹 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidderRank {
    pub user_id: i64,
    pub username: String,
    pub count: usize,
}

/// 상위 입찰자 랭킹: 사용자별 입찰 횟수 내림차순, 상위 10명까지.
/// 동수이면 입력에서 먼저 등장한 사용자가 앞선다(안정 정렬).
/// user_id 가 없는 입찰은 집계에서 제외하고, username 이 없으면 식별자로 대체한다.
pub fn top_bidders(bids: &[AuctionBid]) -> Vec<BidderRank> {
    let mut order: Vec<i64> = Vec::new();
    let mut counts: HashMap<i64, usize> = HashMap::new();
    let mut usernames: HashMap<i64, String> = HashMap::new();

    for bid in bids {
        let user_id = match bid.user_id {
            Some(id) => id,
            None => continue,
        };

        let entry = counts.entry(user_id).or_insert(0);
        if *entry == 0 {
            order.push(user_id);
        }
        *entry += 1;

        if let Some(name) = &bid.username {
            usernames.entry(user_id).or_insert_with(|| name.clone());
        }
    }

    let mut ranked: Vec<BidderRank> = order
        .into_iter()
        .map(|user_id| BidderRank {
            user_id,
            username: usernames
                .remove(&user_id)
                .unwrap_or_else(|| format!("User #{}", user_id)),
            count: counts.get(&user_id).copied().unwrap_or(0),
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(RANKING_LIMIT);
    ranked
}

// endregion: --- Top Bidders
