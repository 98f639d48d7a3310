//! Seed documents shaped like the game backend's collections.

#![allow(dead_code)]

use mongodb::bson::{Document, doc};

/// Smallest possible document, handy when only the byte-exact output matters.
pub fn minimal(id: i32) -> Document {
    doc! { "_id": id }
}

pub fn team(id: i32, color: &str) -> Document {
    doc! {
        "_id": id,
        "color": color,
    }
}

pub fn player(id: i32, role: &str) -> Document {
    doc! {
        "_id": id,
        "role": role,
        "ready": true,
    }
}

pub fn lobby(code: i32, name: &str) -> Document {
    doc! {
        "_id": code,
        "lobbyName": name,
        "lobbyCode": code,
        "gameMode": "CLASSIC",
        "gameStarted": false,
    }
}

pub fn game(id: i32, status: &str) -> Document {
    doc! {
        "_id": id,
        "status": status,
        "teamTurn": "RED",
        "wordCount": 25,
    }
}

pub fn user(id: i32, username: &str) -> Document {
    doc! {
        "_id": id,
        "username": username,
        "wins": 0,
        "losses": 0,
    }
}
