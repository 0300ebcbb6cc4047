//! End-to-end tests: tool dispatch through the registry and the JSON-RPC
//! handler, over a small but realistic catalog.

use serde_json::{json, Map, Value};

use game_items_mcp::{Catalog, Item, JsonRpcRequest, McpServer, ToolRegistry};

fn item(value: Value) -> Item {
    serde_json::from_value(value).unwrap()
}

/// A catalog shaped like the real data export: materials, a craftable
/// consumable, and a weapon with recycle/salvage yields.
fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        item(json!({
            "id": "chemicals",
            "name": { "en": "Chemicals", "de": "Chemikalien" },
            "description": { "en": "Volatile compounds." },
            "type": "Material",
            "rarity": "Common",
            "value": 10.0,
            "weightKg": 0.5,
            "stackSize": 20,
            "imageFilename": "chemicals.webp",
            "updatedAt": "2025-05-01T00:00:00Z"
        })),
        item(json!({
            "id": "metal_parts",
            "name": { "en": "Metal Parts" },
            "description": { "en": "Assorted scrap." },
            "type": "Material",
            "rarity": "Common",
            "value": 8.0,
            "weightKg": 1.2,
            "stackSize": 50,
            "imageFilename": "metal_parts.webp",
            "updatedAt": "2025-05-01T00:00:00Z"
        })),
        item(json!({
            "id": "adrenaline_shot",
            "name": { "en": "Adrenaline Shot" },
            "description": { "en": "Gets you moving." },
            "type": "Quick Use",
            "rarity": "Rare",
            "value": 120.0,
            "weightKg": 0.2,
            "stackSize": 3,
            "imageFilename": "adrenaline_shot.webp",
            "updatedAt": "2025-06-01T00:00:00Z",
            "recipe": { "chemicals": 2.0, "metal_parts": 1.0 },
            "craftBench": "Medical Station",
            "effects": {
                "stamina_boost": { "en": "Restores stamina", "value": "50" }
            }
        })),
        item(json!({
            "id": "scrapper_rifle",
            "name": { "en": "Scrapper Rifle" },
            "description": { "en": "Built from whatever was lying around." },
            "type": "Weapon",
            "rarity": "Uncommon",
            "value": 300.0,
            "weightKg": 4.0,
            "stackSize": 1,
            "imageFilename": "scrapper_rifle.webp",
            "updatedAt": "2025-06-10T00:00:00Z",
            "recyclesInto": { "metal_parts": 4.0 },
            "salvagesInto": { "metal_parts": 1.0, "chemicals": 1.0 }
        })),
    ])
}

fn dispatch(tool: &str, args: Value) -> game_items_mcp::Result<String> {
    let registry = ToolRegistry::new();
    let catalog = fixture_catalog();
    let args: Map<String, Value> = args.as_object().cloned().unwrap_or_default();
    registry.dispatch(&catalog, tool, args)
}

fn dispatch_json(tool: &str, args: Value) -> Value {
    serde_json::from_str(&dispatch(tool, args).unwrap()).unwrap()
}

#[test]
fn search_items_with_no_filters_returns_everything() {
    let results = dispatch_json("search_items", json!({}));
    let ids: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["chemicals", "metal_parts", "adrenaline_shot", "scrapper_rifle"]
    );
}

#[test]
fn search_items_combines_filters() {
    let results = dispatch_json(
        "search_items",
        json!({ "type": "material", "minValue": 9.0 }),
    );
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "chemicals");

    let craftable = dispatch_json("search_items", json!({ "craftable": true }));
    assert_eq!(craftable.as_array().unwrap().len(), 1);

    let localized = dispatch_json(
        "search_items",
        json!({ "name": "chemi", "language": "de" }),
    );
    assert_eq!(localized.as_array().unwrap().len(), 1);
}

#[test]
fn get_item_returns_full_record_or_not_found() {
    let found = dispatch_json("get_item", json!({ "itemId": "adrenaline_shot" }));
    assert_eq!(found["name"]["en"], "Adrenaline Shot");
    assert_eq!(found["effects"]["stamina_boost"]["value"], "50");

    let missing = dispatch("get_item", json!({ "itemId": "nope" })).unwrap();
    assert_eq!(missing, "Item not found");
}

#[test]
fn get_item_requires_item_id() {
    let err = dispatch("get_item", json!({})).unwrap_err();
    assert_eq!(err.to_string(), "Missing required argument: itemId");
}

#[test]
fn get_recipe_resolves_names_and_bench() {
    let recipe = dispatch_json("get_recipe", json!({ "itemId": "adrenaline_shot" }));
    assert_eq!(recipe["craftBench"], "Medical Station");
    assert_eq!(recipe["ingredients"][0]["name"], "Chemicals");
    assert_eq!(recipe["ingredients"][1]["quantity"], 1.0);

    let none = dispatch("get_recipe", json!({ "itemId": "chemicals" })).unwrap();
    assert_eq!(none, "No recipe found for this item");
}

#[test]
fn crafting_chain_lists_materials_depth_first() {
    let chain = dispatch_json("get_crafting_chain", json!({ "itemId": "adrenaline_shot" }));
    assert_eq!(chain["item"]["id"], "adrenaline_shot");
    let steps = chain["chain"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["depth"], 0);
    assert_eq!(steps[0]["quantity"], 1.0);
    assert_eq!(steps[1]["item"]["id"], "chemicals");
    assert_eq!(steps[1]["quantity"], 2.0);
}

#[test]
fn crafting_chain_unknown_item_is_an_error() {
    let err = dispatch("get_crafting_chain", json!({ "itemId": "missing_id" })).unwrap_err();
    assert_eq!(err.to_string(), "Item missing_id not found");
}

#[test]
fn grouping_tools_partition_the_catalog() {
    let by_type = dispatch_json("get_items_by_type", json!({}));
    assert_eq!(by_type["Material"].as_array().unwrap().len(), 2);
    assert_eq!(by_type["Weapon"].as_array().unwrap().len(), 1);
    let total: usize = by_type
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_array().unwrap().len())
        .sum();
    assert_eq!(total, 4);

    let by_rarity = dispatch_json("get_items_by_rarity", json!({}));
    assert_eq!(by_rarity["Common"].as_array().unwrap().len(), 2);
    assert_eq!(by_rarity["Rare"].as_array().unwrap().len(), 1);
}

#[test]
fn recycling_value_sums_yields() {
    let view = dispatch_json("get_recycling_value", json!({ "itemId": "scrapper_rifle" }));
    assert_eq!(view["totalMaterialValue"], 6.0);
    assert_eq!(view["recyclesInto"]["metal_parts"], 4.0);

    // No yield data still answers, with a zero total.
    let bare = dispatch_json("get_recycling_value", json!({ "itemId": "chemicals" }));
    assert_eq!(bare["totalMaterialValue"], 0.0);

    let missing = dispatch("get_recycling_value", json!({ "itemId": "nope" })).unwrap();
    assert_eq!(missing, "Item not found");
}

#[test]
fn compare_items_skips_unknown_ids() {
    let result = dispatch_json(
        "compare_items",
        json!({ "itemIds": ["scrapper_rifle", "missing", "chemicals"] }),
    );
    let ids: Vec<&str> = result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    // Catalog order, not request order.
    assert_eq!(ids, ["chemicals", "scrapper_rifle"]);

    let comparison = &result["comparison"];
    assert_eq!(comparison["value"]["chemicals"], 10.0);
    assert_eq!(comparison["weight"]["scrapper_rifle"], 4.0);
    assert_eq!(comparison["stackSize"]["chemicals"], 20);
    assert_eq!(comparison["craftable"]["scrapper_rifle"], false);
    assert!(comparison["value"].get("missing").is_none());
}

#[test]
fn tools_call_wraps_results_in_text_content() {
    let server = McpServer::new(fixture_catalog());
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(7)),
        method: "tools/call".to_string(),
        params: json!({
            "name": "get_item",
            "arguments": { "itemId": "chemicals" }
        }),
    };

    let response = server.handle(request);
    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["type"], "text");
    let body: Value =
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(body["id"], "chemicals");
    assert!(result.get("isError").is_none());
}
