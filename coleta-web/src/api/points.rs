use serde::Deserialize;
use web_sys::{File, FormData};

use crate::api::error::ApiError;
use crate::api::http::{get_json, post_form_data};
use crate::vars::API_BASE_URL;
use crate::PointPayload;

/// A selectable recycling-category catalog entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    data: Vec<Item>,
}

// error body of the points API; the message sits at the top level of the
// response, not under a `data` key
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Fetches the item catalog. The response array is stored verbatim.
pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    let envelope: ItemsEnvelope =
        get_json(&format!("{}/items", API_BASE_URL)).await?;
    Ok(envelope.data)
}

fn build_form_data(
    payload: &PointPayload,
    image: Option<&File>,
) -> Result<FormData, ApiError> {
    let form_data = FormData::new()?;
    for (name, value) in payload.fields() {
        form_data.append_with_str(name, &value)?;
    }
    if let Some(file) = image {
        form_data.append_with_blob("image", file)?;
    }
    Ok(form_data)
}

/// Registers a collection point. Any 2xx counts as success; a failure
/// response must carry a top-level `message`, anything else surfaces as a
/// decode error.
pub async fn register_point(
    payload: &PointPayload,
    image: Option<&File>,
) -> Result<(), ApiError> {
    let form_data = build_form_data(payload, image)?;
    let (status, body) =
        post_form_data(&format!("{}/points", API_BASE_URL), &form_data)
            .await?;
    if (200..300).contains(&status) {
        return Ok(());
    }

    let error: ErrorBody = serde_json::from_str(&body)?;
    Err(ApiError::Server {
        status,
        message: error.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_envelope_decode() {
        let envelope: ItemsEnvelope = serde_json::from_str(
            r#"{"data": [
                {"id": 1, "title": "Lâmpadas",
                 "image_url": "http://localhost:3333/uploads/lampadas.svg"},
                {"id": 2, "title": "Pilhas e Baterias",
                 "image_url": "http://localhost:3333/uploads/baterias.svg"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].id, 1);
        assert_eq!(envelope.data[1].title, "Pilhas e Baterias");
    }

    #[test]
    fn test_error_body_reads_top_level_message() {
        let error: ErrorBody =
            serde_json::from_str(r#"{"message": "missing fields"}"#).unwrap();
        assert_eq!(error.message, "missing fields");
    }

    #[test]
    fn test_error_body_rejects_nested_message() {
        // a `data.message` shape does not satisfy the expected body and
        // becomes a decode error further up
        let result = serde_json::from_str::<ErrorBody>(
            r#"{"data": {"message": "missing fields"}}"#,
        );
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::base::registration::Field;
    use crate::LatLng;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_build_form_data_fields() {
        let mut payload = PointPayload::default();
        payload
            .registration
            .set(Field::Name, "Eco Ponto".to_string());
        payload.uf = "SP".to_string();
        payload.city = "Santos".to_string();
        payload.position = LatLng::new(-23.5, -46.6);
        payload.items.toggle(5);
        payload.items.toggle(2);

        let form_data = build_form_data(&payload, None).unwrap();
        assert_eq!(form_data.get("name").as_string().unwrap(), "Eco Ponto");
        assert_eq!(form_data.get("email").as_string().unwrap(), "");
        assert_eq!(form_data.get("UF").as_string().unwrap(), "SP");
        assert_eq!(form_data.get("city").as_string().unwrap(), "Santos");
        assert_eq!(form_data.get("latitude").as_string().unwrap(), "-23.5");
        assert_eq!(form_data.get("longitude").as_string().unwrap(), "-46.6");
        assert_eq!(form_data.get("items").as_string().unwrap(), "2,5");
        // no image part was appended
        assert!(form_data.get("image").is_undefined());
    }
}
