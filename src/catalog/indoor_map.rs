//! Indoor-map backend models.
//!
//! Field signatures and struct tags are written exactly as the backend declares them,
//! including tags that only matter to the persistence layer.

use crate::domain::model::{FieldDef, ModelDefinition};
use crate::domain::ports::ModelCatalog;

/// Models exported to the front end, in output order.
pub const DEFAULT_ALLOW_LIST: &[&str] = &[
    "Point2f", "Map", "Building", "Floor", "Room", "Indent", "Sensor", "MapNode", "NodeEdge",
];

fn field(name: &str, signature: &str, tag: &str) -> FieldDef {
    FieldDef::new(name, signature).tagged(tag)
}

pub struct IndoorMapCatalog {
    models: Vec<ModelDefinition>,
}

impl Default for IndoorMapCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl IndoorMapCatalog {
    pub fn new() -> Self {
        Self {
            models: vec![
                pair_point2f(),
                point2f(),
                pair2f(),
                map_node(),
                node_edge(),
                auth0_user(),
                map(),
                building(),
                floor(),
                sensor(),
                indent(),
                entrance(),
                room(),
            ],
        }
    }
}

impl ModelCatalog for IndoorMapCatalog {
    fn models(&self) -> &[ModelDefinition] {
        &self.models
    }
}

fn pair_point2f() -> ModelDefinition {
    ModelDefinition::new("PairPoint2f")
        .field(field("First", "model.Point2f", r#"json:"fst""#))
        .field(field("Second", "model.Point2f", r#"json:"snd""#))
}

fn point2f() -> ModelDefinition {
    ModelDefinition::new("Point2f")
        .field(field("X", "*float64", r#"json:"x""#))
        .field(field("Y", "*float64", r#"json:"y""#))
}

fn pair2f() -> ModelDefinition {
    ModelDefinition::new("Pair2f")
        .field(field("First", "model.Point2f", r#"json:"first""#))
        .field(field("Second", "model.Point2f", r#"json:"second""#))
}

fn map_node() -> ModelDefinition {
    ModelDefinition::new("MapNode")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field("MapId", "int", r#"json:"mapId""#))
        .field(field(
            "Location",
            "model.Point2f",
            r#"json:"location" gorm:"embedded;embeddedPrefix:location_""#,
        ))
        .field(field("RootNode", "bool", r#"json:"rootNode""#))
        .field(field("FloorIndex", "*int", r#"json:"floorIndex""#))
        .field(field("BiDirectional", "bool", r#"json:"bidirectional""#))
}

fn node_edge() -> ModelDefinition {
    ModelDefinition::new("NodeEdge")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field("MapId", "int", r#"json:"mapId""#))
        .field(field("Node1Id", "int", r#"json:"node1Id""#))
        .field(field("Node2Id", "int", r#"json:"node2Id""#))
        .field(field(
            "Node1",
            "*model.MapNode",
            r#"json:"-" gorm:"foreignkey:Node1Id;references:Id""#,
        ))
        .field(field(
            "Node2",
            "*model.MapNode",
            r#"json:"-" gorm:"foreignkey:Node2Id;references:Id""#,
        ))
}

fn auth0_user() -> ModelDefinition {
    ModelDefinition::new("Auth0User")
        .field(field("Id", "int", r#"gorm:"primaryKey""#))
        .field(FieldDef::new("Authid", "string"))
        .field(field("Maps", "[]model.Map", r#"gorm:"many2many:user_map_jt;""#))
}

fn map() -> ModelDefinition {
    ModelDefinition::new("Map")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field("Password", "string", r#"json:"password""#))
        .field(field("Name", "string", r#"json:"name""#))
        .field(field(
            "Buildings",
            "[]model.Building",
            r#"json:"buildings" gorm:"references:Id;OnDelete:CASCADE""#,
        ))
        .field(field(
            "Users",
            "[]model.Auth0User",
            r#"json:"-" gorm:"many2many:user_map_jt;""#,
        ))
        .field(field(
            "Nodes",
            "[]model.MapNode",
            r#"json:"nodes" gorm:"references:Id;OnDelete:CASCADE""#,
        ))
        .field(field(
            "Edges",
            "[]model.NodeEdge",
            r#"json:"edges" gorm:"references:Id;OnDelete:CASCADE""#,
        ))
        .field(field("NorthAngle", "float64", r#"json:"northAngle""#))
        .field(FieldDef::new("Deleted", "gorm.DeletedAt"))
}

fn building() -> ModelDefinition {
    ModelDefinition::new("Building")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field("MapId", "int", r#"json:"mapId""#))
        .field(field("BuildingName", "string", r#"json:"buildingName""#))
        .field(field(
            "Location",
            "model.Point2f",
            r#"json:"location" gorm:"embedded;embeddedPrefix:location_""#,
        ))
        .field(field(
            "Floors",
            "[]model.Floor",
            r#"json:"floors" gorm:"references:Id;OnDelete:CASCADE""#,
        ))
}

fn floor() -> ModelDefinition {
    ModelDefinition::new("Floor")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field("BuildingId", "int", r#"json:"buildingId""#))
        .field(field("FloorNumber", "*int", r#"json:"floorNumber""#))
        .field(field("FloorName", "string", r#"json:"floorName""#))
        .field(field(
            "Location",
            "model.Point2f",
            r#"json:"location" gorm:"embedded;embeddedPrefix:location_""#,
        ))
        .field(field(
            "Rooms",
            "[]model.Room",
            r#"json:"rooms" gorm:"references:Id;OnDelete:CASCADE""#,
        ))
        .field(field(
            "Sensors",
            "[]model.Sensor",
            r#"json:"sensors"gorm:"OnDelete:CASCADE""#,
        ))
}

fn sensor() -> ModelDefinition {
    ModelDefinition::new("Sensor")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field("SensorId", "string", r#"json:"sensorId""#))
        .field(field("FloorId", "int", r#"json:"floorId""#))
        .field(field(
            "Location",
            "model.Point2f",
            r#"json:"location" gorm:"embedded;embeddedPrefix:location_""#,
        ))
}

fn indent() -> ModelDefinition {
    ModelDefinition::new("Indent")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field("RoomId", "int", r#"json:"roomId""#))
        .field(field("WallKeyA", "*string", r#"json:"wallKeyA" gorm:"column:wallKeyA""#))
        .field(field("WallKeyB", "*string", r#"json:"wallKeyB" gorm:"column:wallKeyB""#))
        .field(field("Location", "float64", r#"json:"location""#))
        .field(field(
            "Dimensions",
            "model.Point2f",
            r#"json:"dimensions" gorm:"embedded;embeddedPrefix:size_""#,
        ))
}

fn entrance() -> ModelDefinition {
    ModelDefinition::new("Entrance")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field(
            "Start",
            "model.Point2f",
            r#"json:"start" gorm:"embedded;embeddedPrefix:start_""#,
        ))
        .field(field(
            "End",
            "model.Point2f",
            r#"json:"end" gorm:"embedded;embeddedPrefix:end_""#,
        ))
}

fn room() -> ModelDefinition {
    ModelDefinition::new("Room")
        .field(field("Id", "int", r#"json:"id" gorm:"primaryKey""#))
        .field(field("FloorId", "int", r#"json:"floorId""#))
        .field(field("Rotation", "*float64", r#"json:"rotation""#))
        .field(field("Name", "string", r#"json:"name""#))
        .field(field(
            "Location",
            "model.Point2f",
            r#"json:"location" gorm:"embedded;embeddedPrefix:location_""#,
        ))
        .field(field(
            "Dimensions",
            "model.Point2f",
            r#"json:"dimensions" gorm:"embedded;embeddedPrefix:size_""#,
        ))
        .field(field(
            "Indents",
            "[]model.Indent",
            r#"json:"indents" gorm:"references:Id;OnDelete:CASCADE""#,
        ))
        .field(field("Polygon", "[]model.Point2f", r#"json:"polygon" gorm:"-""#))
        .field(field("Walls", "[]*model.PairPoint2f", r#"json:"walls" gorm:"-""#))
        .field(field(
            "Entrances",
            "[]model.Entrance",
            r#"json:"entrances" gorm:"references:Id;many2many:room_entrance_jt;OnDelete:CASCADE""#,
        ))
}
