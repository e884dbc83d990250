use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{error, info};
use serde::{Deserialize, Serialize};

pub const CASUAL_MODE: i32 = 0;
pub const CHALLENGING_MODE: i32 = 1;
pub const RANK_MAX_COUNT: usize = 10;
pub const RANK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRecord {
    pub score: u32,
    #[serde(rename = "dishesCount")]
    pub dishes_count: u32,
    pub time: String,
    pub mode: i32,
}

impl RankRecord {
    pub fn casual(dishes_count: u32, time: String) -> Self {
        Self {
            score: 0,
            dishes_count,
            time,
            mode: CASUAL_MODE,
        }
    }

    pub fn challenging(score: u32, time: String) -> Self {
        Self {
            score,
            dishes_count: 0,
            time,
            mode: CHALLENGING_MODE,
        }
    }

    /// Value records of the same mode are ranked by.
    pub fn merit(&self) -> u32 {
        if self.mode == CHALLENGING_MODE {
            self.score
        } else {
            self.dishes_count
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankList {
    #[serde(rename = "rankList", default)]
    pub rank_list: Vec<RankRecord>,
}

#[derive(Debug)]
pub enum RankError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for RankError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for RankError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

/// Ranking of finished games persisted as JSON document.
pub struct RankBook {
    path: PathBuf,
}

impl RankBook {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Missing or broken file gives empty ranking.
    pub fn load(&self) -> RankList {
        if !self.path.exists() {
            return RankList::default();
        }
        match self.read() {
            Ok(list) => list,
            Err(err) => {
                error!(
                    "Unable to load ranking {}, {:?}",
                    self.path.display(),
                    err
                );
                RankList::default()
            }
        }
    }

    fn read(&self) -> Result<RankList, RankError> {
        let json = fs::read_to_string(&self.path)?;
        let list = serde_json::from_str(&json)?;
        Ok(list)
    }

    pub fn save(&self, list: &RankList) -> Result<(), RankError> {
        let json = serde_json::to_string_pretty(list)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn add_casual(&self, dishes_count: u32) -> Result<(), RankError> {
        self.add(RankRecord::casual(dishes_count, now()))
    }

    pub fn add_challenging(&self, score: u32) -> Result<(), RankError> {
        self.add(RankRecord::challenging(score, now()))
    }

    /// Inserts record keeping only best records of its mode.
    pub fn add(&self, record: RankRecord) -> Result<(), RankError> {
        info!(
            "Add rank record mode={} merit={}",
            record.mode,
            record.merit()
        );
        let mut list = self.load();
        let mode = record.mode;
        list.rank_list.push(record);
        let (mut same, others): (Vec<_>, Vec<_>) = list
            .rank_list
            .into_iter()
            .partition(|record| record.mode == mode);
        sort_by_merit(&mut same);
        same.truncate(RANK_MAX_COUNT);
        list.rank_list = others;
        list.rank_list.extend(same);
        self.save(&list)
    }

    pub fn list(&self, mode: i32) -> Vec<RankRecord> {
        let mut records: Vec<RankRecord> = self
            .load()
            .rank_list
            .into_iter()
            .filter(|record| record.mode == mode)
            .collect();
        sort_by_merit(&mut records);
        records
    }

    pub fn clear(&self) -> Result<(), RankError> {
        self.save(&RankList::default())
    }
}

/// Descending, earlier records first among equals.
fn sort_by_merit(records: &mut [RankRecord]) {
    records.sort_by(|a, b| b.merit().cmp(&a.merit()));
}

fn now() -> String {
    Local::now().format(RANK_TIME_FORMAT).to_string()
}
