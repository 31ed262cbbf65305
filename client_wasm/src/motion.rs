//! Decoding hand-tracking frames handed over from the device SDK.
//! Unreadable hands or pointables are skipped, never fatal.

use game_core::{Finger, Hand, HandFrame, Pointable};
use glam::Vec3;
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn field(obj: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn array(obj: &JsValue, key: &str) -> Option<Array> {
    field(obj, key)?.dyn_into::<Array>().ok()
}

fn parse_pointable(value: &JsValue) -> Option<Pointable> {
    let finger = Finger::from_type(field(value, "type")?.as_f64()? as u32)?;
    let direction = array(value, "direction")?;
    let component = |i: u32| direction.get(i).as_f64().map(|v| v as f32);
    Some(Pointable {
        finger,
        direction: Vec3::new(component(0)?, component(1)?, component(2)?),
    })
}

fn parse_hand(value: &JsValue) -> Hand {
    let index_extended = field(value, "indexFinger")
        .and_then(|finger| field(&finger, "extended"))
        .and_then(|extended| extended.as_bool())
        .unwrap_or(false);
    let pointables = array(value, "pointables")
        .map(|list| list.iter().filter_map(|p| parse_pointable(&p)).collect())
        .unwrap_or_default();
    Hand {
        index_extended,
        pointables,
    }
}

pub fn parse_frame(frame: &JsValue) -> HandFrame {
    let hands = array(frame, "hands")
        .map(|list| list.iter().map(|hand| parse_hand(&hand)).collect())
        .unwrap_or_default();
    HandFrame { hands }
}
