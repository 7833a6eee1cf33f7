use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Utility bills
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_electricity_bill(input_json: String) -> NapiResult<String> {
    let input: janseva_core::electricity::ElectricityBillInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = janseva_core::electricity::calculate_electricity_bill(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_water_bill(input_json: String) -> NapiResult<String> {
    let input: janseva_core::water::WaterBillInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = janseva_core::water::calculate_water_bill(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Taxes
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_gst(input_json: String) -> NapiResult<String> {
    let input: janseva_core::gst::GstInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = janseva_core::gst::calculate_gst(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_income_tax(input_json: String) -> NapiResult<String> {
    let input: janseva_core::income_tax::IncomeTaxInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        janseva_core::income_tax::calculate_income_tax(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Savings
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_sip(input_json: String) -> NapiResult<String> {
    let input: janseva_core::sip::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = janseva_core::sip::calculate_sip(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
