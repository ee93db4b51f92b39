// Copyright 2024 The AuthGate Rust Authors
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

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// Session status of the user making the request.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserStatus {
    Online = 1,
    Offline = 2,
}

impl UserStatus {
    #[inline]
    pub fn get_by_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("online") {
            Some(UserStatus::Online)
        } else if name.eq_ignore_ascii_case("offline") {
            Some(UserStatus::Offline)
        } else {
            None
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            UserStatus::Online => "online",
            UserStatus::Offline => "offline",
        }
    }
}

impl Serialize for UserStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = u8::deserialize(deserializer)?;
        match v {
            1 => Ok(UserStatus::Online),
            2 => Ok(UserStatus::Offline),
            _ => Err(serde::de::Error::custom("invalid UserStatus")),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json;

    use super::*;

    #[test]
    fn test_get_by_name() {
        assert_eq!(UserStatus::get_by_name("online"), Some(UserStatus::Online));
        assert_eq!(UserStatus::get_by_name("ONLINE"), Some(UserStatus::Online));
        assert_eq!(UserStatus::get_by_name("Online"), Some(UserStatus::Online));
        assert_eq!(UserStatus::get_by_name("offline"), Some(UserStatus::Offline));
        assert_eq!(UserStatus::get_by_name("OFFLINE"), Some(UserStatus::Offline));
        assert_eq!(UserStatus::get_by_name("Offline"), Some(UserStatus::Offline));
        assert_eq!(UserStatus::get_by_name("invalid"), None);
        assert_eq!(UserStatus::get_by_name(""), None);
    }

    #[test]
    fn test_code() {
        assert_eq!(UserStatus::Online.code(), 1);
        assert_eq!(UserStatus::Offline.code(), 2);
    }

    #[test]
    fn test_name() {
        assert_eq!(UserStatus::Online.name(), "online");
        assert_eq!(UserStatus::Offline.name(), "offline");
    }

    #[test]
    fn test_serialize() {
        let online_json = serde_json::to_string(&UserStatus::Online).unwrap();
        assert_eq!(online_json, "1");

        let offline_json = serde_json::to_string(&UserStatus::Offline).unwrap();
        assert_eq!(offline_json, "2");
    }

    #[test]
    fn test_deserialize() {
        let online: UserStatus = serde_json::from_str("1").unwrap();
        assert_eq!(online, UserStatus::Online);

        let offline: UserStatus = serde_json::from_str("2").unwrap();
        assert_eq!(offline, UserStatus::Offline);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<UserStatus, _> = serde_json::from_str("0");
        assert!(result.is_err());

        let result: Result<UserStatus, _> = serde_json::from_str("3");
        assert!(result.is_err());

        let result: Result<UserStatus, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
