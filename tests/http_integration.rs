// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport using wiremock.

#![cfg(feature = "http")]

use std::time::Duration;

use velair_lib::command::StatusCommand;
use velair_lib::protocol::{HttpClient, HttpConfig, Protocol};
use velair_lib::types::{DeviceMode, FanSpeed};
use velair_lib::{Device, DeviceError, Error, ProtocolError, ValueError};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORM: &str = "application/x-www-form-urlencoded";

fn device_for(server: &MockServer) -> Device<HttpClient> {
    Device::http(HttpConfig::new(server.uri())).unwrap()
}

fn ok_ack() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true }))
}

// ============================================================================
// Status
// ============================================================================

mod status {
    use super::*;

    #[tokio::test]
    async fn get_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "RESULT": {"fs": 2, "nm": 1, "ps": 0, "sp": 22, "t": 25, "wm": 1},
                "setup": {"name": "LivingRoom"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let status = device_for(&mock_server).get_status().await.unwrap();

        assert_eq!(status.name, "LivingRoom");
        assert_eq!(status.fan_speed, FanSpeed::Medium);
        assert!(status.night_mode);
        assert!(!status.power);
        assert_eq!(status.set_point, 22);
        assert_eq!(status.temperature, 25);
        assert_eq!(status.mode, DeviceMode::Cooling);
    }

    #[tokio::test]
    async fn get_status_device_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "error": "busy"
            })))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server).get_status().await.unwrap_err();
        assert!(matches!(err, Error::Device(DeviceError::Reported(ref m)) if m == "busy"));
    }

    #[tokio::test]
    async fn get_status_unused_mode() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "RESULT": {"fs": 2, "nm": 1, "ps": 0, "sp": 22, "t": 25, "wm": 2},
                "setup": {"name": "LivingRoom"}
            })))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server).get_status().await.unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::InvalidDeviceMode(2))));
    }

    #[tokio::test]
    async fn get_status_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server).get_status().await.unwrap_err();
        assert!(err.is_malformed_response());
    }

    #[tokio::test]
    async fn raw_client_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":false}"#))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let response = client.send_command(&StatusCommand).await.unwrap();

        assert_eq!(response.body(), br#"{"success":false}"#);
        assert!(response.status().unwrap_err().is_ambiguous_failure());
    }
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;

    #[tokio::test]
    async fn set_night_mode_on() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/set/feature/night"))
            .and(header("content-type", FORM))
            .and(body_string("value=1"))
            .respond_with(ok_ack())
            .expect(1)
            .mount(&mock_server)
            .await;

        device_for(&mock_server).set_night_mode(true).await.unwrap();
    }

    #[tokio::test]
    async fn set_night_mode_off() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/set/feature/night"))
            .and(body_string("value=0"))
            .respond_with(ok_ack())
            .expect(1)
            .mount(&mock_server)
            .await;

        device_for(&mock_server).set_night_mode(false).await.unwrap();
    }

    #[tokio::test]
    async fn set_fan_speed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/set/fan"))
            .and(header("content-type", FORM))
            .and(body_string("value=3"))
            .respond_with(ok_ack())
            .expect(1)
            .mount(&mock_server)
            .await;

        device_for(&mock_server)
            .set_fan_speed(FanSpeed::High)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn set_mode_uses_path_segment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/set/mode/fanonly"))
            .respond_with(ok_ack())
            .expect(1)
            .mount(&mock_server)
            .await;

        device_for(&mock_server)
            .set_mode(DeviceMode::FanOnly)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn set_mode_error_overrides_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/set/mode/dehumidification"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "error": "unsupported"
            })))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server)
            .set_mode(DeviceMode::Dehumidify)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Device(DeviceError::Reported(ref m)) if m == "unsupported"
        ));
    }

    #[tokio::test]
    async fn set_fan_speed_ambiguous_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v/1/set/fan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false
            })))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server)
            .set_fan_speed(FanSpeed::Low)
            .await
            .unwrap_err();
        assert!(err.is_ambiguous_failure());
    }
}

// ============================================================================
// Transport failures
// ============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn non_ok_status_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server).get_status().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::UnexpectedStatus(404))
        ));
    }

    #[tokio::test]
    async fn no_content_status_is_not_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server)
            .set_night_mode(true)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::UnexpectedStatus(204))
        ));
    }

    #[tokio::test]
    async fn timeout_is_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ok_ack().set_delay(Duration::from_millis(500)))
            .mount(&mock_server)
            .await;

        let config = HttpConfig::new(mock_server.uri()).with_timeout(Duration::from_millis(50));
        let err = Device::http(config)
            .unwrap()
            .set_night_mode(true)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::Http(_))));
    }
}
