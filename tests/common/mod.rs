//! Shared fixtures for integration tests

use aralia::{Dataset, Query};

/// A movie box-office dataset with one categorical and one numeric column
pub fn box_office_dataset() -> Dataset {
    serde_json::from_value(serde_json::json!({
        "id": "D1",
        "name": "電影票房資料",
        "sourceType": "x_planet",
        "siteName": "娛樂星球",
        "sourceURL": "https://tw-entertainment.araliadata.io/api",
        "columns": [
            {"id": "C1", "name": "Country", "type": "nominal", "datasetID": "D1"},
            {"id": "C2", "name": "Sales", "type": "float", "datasetID": "D1"},
            {"id": "C3", "name": "上映日期", "type": "date", "datasetID": "D1"},
            {"id": "C4", "name": "放映地點", "type": "space", "datasetID": "D1"}
        ]
    }))
    .expect("fixture dataset should deserialize")
}

/// An unrelated second dataset, for dataset-lookup tests
pub fn air_quality_dataset() -> Dataset {
    serde_json::from_value(serde_json::json!({
        "id": "D2",
        "name": "每小時空氣品質監測",
        "sourceURL": "https://tw-air.araliadata.io/api",
        "columns": [
            {"id": "A1", "name": "測站", "type": "nominal", "datasetID": "D2"},
            {"id": "A2", "name": "PM2.5", "type": "float", "datasetID": "D2"}
        ]
    }))
    .expect("fixture dataset should deserialize")
}

/// A query over `box_office_dataset` that validates cleanly
pub fn box_office_query() -> Query {
    serde_json::from_value(serde_json::json!({
        "sourceURL": "https://tw-entertainment.araliadata.io/api",
        "dataset_id": "D1",
        "dataset_name": "電影票房資料",
        "x": [{
            "columnID": "C1",
            "column_name": "Country",
            "type": "nominal",
            "country": "Taiwan",
            "language": "zh-tw"
        }],
        "y": [{
            "columnID": "C2",
            "column_name": "Sales",
            "type": "float",
            "calculation": "avg"
        }]
    }))
    .expect("fixture query should deserialize")
}
