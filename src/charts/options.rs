//! Static option objects handed to the chart libraries.

use serde_json::{json, Value};

/// Title block shared by every ECharts chart
fn title(text: &str) -> Value {
    json!({
        "top": 30,
        "left": "center",
        "text": text,
    })
}

fn category_axis(name: &str) -> Value {
    json!({
        "name": name,
        "nameLocation": "middle",
        "nameGap": 30,
        "type": "category",
    })
}

fn minutes_axis(rotate_name: bool) -> Value {
    let mut axis = json!({
        "name": "Minutes",
        "nameLocation": "middle",
        "nameGap": 30,
        "type": "value",
    });
    if rotate_name {
        axis["nameRotate"] = json!(90);
    }
    axis
}

fn bar_series(count: usize) -> Value {
    Value::Array((0..count).map(|_| json!({ "type": "bar" })).collect())
}

/// Bar chart over a `[category, total_minutes]` dataset.
pub fn bar_chart(
    text: &str,
    x_name: &str,
    dimensions: Value,
    source: Value,
    series: usize,
    rotate_y_name: bool,
) -> Value {
    json!({
        "dataset": {
            "dimensions": dimensions,
            "source": source,
        },
        "title": title(text),
        "xAxis": category_axis(x_name),
        "yAxis": minutes_axis(rotate_y_name),
        "series": bar_series(series),
    })
}

/// Calendar heatmap of minutes per day.
pub fn daily_heatmap(text: &str, source: Value, max: Value, range: &str) -> Value {
    json!({
        "title": title(text),
        "tooltip": {},
        "visualMap": {
            "min": 0,
            "max": max,
            "type": "piecewise",
            "orient": "horizontal",
            "left": "center",
            "top": 65,
        },
        "calendar": {
            "dayLabel": {
                "firstDay": 1,
                "nameMap": "en",
            },
            "monthLabel": {
                "nameMap": "en",
            },
            "top": 120,
            "left": 30,
            "right": 30,
            "cellSize": ["auto", 14],
            "range": range,
            "itemStyle": {
                "borderWidth": 0.5,
            },
            "yearLabel": { "show": true },
        },
        "dataset": {
            "dimensions": ["date", "total_minutes"],
            "source": source,
        },
        "series": {
            "type": "heatmap",
            "coordinateSystem": "calendar",
        },
    })
}

/// Plotly layout for grouped bars
pub fn grouped_bar_layout() -> Value {
    json!({ "barmode": "group" })
}
