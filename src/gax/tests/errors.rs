// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
mod tests {
    use google_cloud_gax::error::Error;
    use google_cloud_gax::error::rpc::{Code, Status};
    use std::error::Error as _;

    #[derive(Debug, Default)]
    struct LeafError {}

    impl LeafError {
        fn hey(&self) -> &'static str {
            "hey"
        }
    }

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "leaf error")
        }
    }

    impl std::error::Error for LeafError {}

    #[derive(Debug)]
    struct MiddleError {
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    }

    impl std::fmt::Display for MiddleError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "middle error")
        }
    }

    impl std::error::Error for MiddleError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
        }
    }

    fn find_leaf(error: &Error) -> Option<&LeafError> {
        let mut current = error.source();
        while let Some(e) = current {
            if let Some(leaf) = e.downcast_ref::<LeafError>() {
                return Some(leaf);
            }
            current = e.source();
        }
        None
    }

    #[test]
    fn downcast() {
        let root = Error::io(MiddleError {
            source: Some(Box::new(LeafError::default())),
        });
        let msg = find_leaf(&root).map(LeafError::hey);
        assert_eq!(msg, Some("hey"));

        let root = Error::io(MiddleError { source: None });
        assert!(find_leaf(&root).is_none(), "{root:?}");
    }

    #[test]
    fn service_error_is_not_transport() {
        let status = Status::default()
            .set_code(Code::FailedPrecondition)
            .set_message("campaign is archived");
        let error = Error::service_with_http_metadata(status, Some(400), None);
        assert!(!error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.status().map(|s| s.code), Some(Code::FailedPrecondition));
    }

    static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
}
