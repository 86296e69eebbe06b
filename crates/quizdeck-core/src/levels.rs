// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Level arithmetic, used to show progress and lock state without a round
//! trip. The server remains the authority.

/// Points needed per level.
pub const POINTS_PER_LEVEL: i64 = 100;

pub const MAX_LEVEL: i64 = 10;

pub fn level_from_points(points: i64) -> i64 {
    (points.max(0) / POINTS_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Points required to reach `level`.
pub fn level_requirement(level: i64) -> i64 {
    level * POINTS_PER_LEVEL
}

pub fn points_to_next_level(points: i64, level: i64) -> i64 {
    level_requirement(level) - points
}

pub fn is_max_level(level: i64) -> bool {
    level >= MAX_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_points() {
        assert_eq!(level_from_points(0), 1);
        assert_eq!(level_from_points(99), 1);
        assert_eq!(level_from_points(100), 2);
        assert_eq!(level_from_points(5000), MAX_LEVEL);
        assert_eq!(level_from_points(-5), 1);
    }

    #[test]
    fn test_points_to_next_level() {
        assert_eq!(points_to_next_level(120, 2), 80);
        assert!(is_max_level(10));
        assert!(!is_max_level(9));
    }
}
