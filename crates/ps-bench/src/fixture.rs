use std::fs;
use std::path::{Path, PathBuf};

/// A medium-sized module touching every extractor.
pub const SERVICE_SOURCE: &str = r#"
from __future__ import annotations

import logging
import numpy as np
from typing import Any, Optional
from . import helpers
from ..models import *

log = logging.getLogger(__name__)


class UserService:
    """Service for user management."""

    retries: int = 3
    cache: Optional[dict]

    def __init__(self, repo):
        self.repo = repo

    def create_user(self, name: str, email: str = "", admin=False) -> dict:
        return {"name": name, "email": email}

    def delete_user(self, user_id: int) -> bool:
        return True

    async def find_user(self, email: str) -> Optional[dict]:
        return await self.repo.find(email)

    @classmethod
    def build(cls, repo=None):
        return cls(repo)


class AdminService(UserService):
    level: int

    def promote(self, user_id: int, *, notify: bool = True) -> bool:
        return True


def process_request(data: dict, strict=False) -> dict:
    def validate(item: Any) -> bool:
        return item is not None

    svc = UserService(None)
    return svc.create_user(data["name"])


BATCH_SIZE = 100
"#;

/// Write `count` generated Python modules under `root/src` and return their
/// paths in creation order.
pub fn create_python_project(root: &Path, count: usize) -> Vec<PathBuf> {
    let src = root.join("src");
    fs::create_dir_all(&src).unwrap();

    (0..count)
        .map(|i| {
            let path = src.join(format!("mod_{i}.py"));
            fs::write(&path, scaled_module(i)).unwrap();
            path
        })
        .collect()
}

/// Source of the `i`-th generated module.
pub fn scaled_module(i: usize) -> String {
    format!(
        r#"
import os
from .base import Base{i} as Base

class Service{i}(Base):
    """Service number {i}."""

    name: str
    limit: int = {i}

    def __init__(self, name: str):
        self.name = name

    def process(self, data: dict, retries: int = 3) -> dict:
        return {{"name": self.name, "data": data}}

    def validate(self, input_val: str) -> bool:
        return len(input_val) > 0

def create_service_{i}() -> Service{i}:
    return Service{i}("svc_{i}")

def helper_{i}(x: int, y=os.sep) -> int:
    return x + {i}
"#
    )
}
