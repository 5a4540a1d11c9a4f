/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::DEFAULT_PER_PAGE;
use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "LabTrack", display_name = "LabTrack", bin_name = "labtrack-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "LABTRACK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "LABTRACK_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "LABTRACK_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "LABTRACK_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "LABTRACK_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "LABTRACK_DEFAULT_PER_PAGE", value_parser = greater_than_zero::<u64>, default_value_t = DEFAULT_PER_PAGE)]
    pub default_per_page: u64,
    #[arg(long, env = "LABTRACK_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "LABTRACK_ADMIN_USER")]
    pub admin_user: Option<String>,
    #[arg(long, env = "LABTRACK_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EExperiment = experiment::Entity;
pub type EUser = user::Entity;

pub type MExperiment = experiment::Model;
pub type MUser = user::Model;

pub type AExperiment = experiment::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CExperiment = experiment::Column;
pub type CUser = user::Column;
