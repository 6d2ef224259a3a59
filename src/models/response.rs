use serde::Deserialize;

/// Response envelope the LearnMap backend wraps every payload in.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// The payload, but only for a successful envelope.
    pub fn into_data(self) -> Option<T> {
        if self.status_code == 200 {
            self.data
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_data_requires_status_200() {
        let ok: ApiResponse<u32> =
            serde_json::from_str(r#"{"statusCode":200,"data":7}"#).unwrap();
        assert_eq!(ok.into_data(), Some(7));

        let failed: ApiResponse<u32> =
            serde_json::from_str(r#"{"statusCode":400,"data":7,"error":"bad"}"#).unwrap();
        assert_eq!(failed.into_data(), None);
    }

    #[test]
    fn missing_data_field_parses_as_none() {
        let resp: ApiResponse<u32> =
            serde_json::from_str(r#"{"statusCode":204,"message":"deleted"}"#).unwrap();
        assert_eq!(resp.data, None);
        assert_eq!(resp.message.as_deref(), Some("deleted"));
    }
}
