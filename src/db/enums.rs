use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Membership categories. Only active categories may register into pools
/// or hold a team assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Full,
    Social,
    Life,
    Pending,
    Lapsed,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Full => "full",
            MemberStatus::Social => "social",
            MemberStatus::Life => "life",
            MemberStatus::Pending => "pending",
            MemberStatus::Lapsed => "lapsed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "full" => Some(MemberStatus::Full),
            "social" => Some(MemberStatus::Social),
            "life" => Some(MemberStatus::Life),
            "pending" => Some(MemberStatus::Pending),
            "lapsed" => Some(MemberStatus::Lapsed),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self,
            MemberStatus::Full | MemberStatus::Social | MemberStatus::Life
        )
    }
}

impl FromSql<Text, Pg> for MemberStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        MemberStatus::from_str(&s).ok_or_else(|| "Unrecognized enum variant".into())
    }
}

impl ToSql<Text, Pg> for MemberStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Member,
    Manager,
    Admin,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Member => "member",
            MemberRole::Manager => "manager",
            MemberRole::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "member" => Some(MemberRole::Member),
            "manager" => Some(MemberRole::Manager),
            "admin" => Some(MemberRole::Admin),
            _ => None,
        }
    }

    pub fn can_manage(&self) -> bool {
        matches!(self, MemberRole::Manager | MemberRole::Admin)
    }
}

impl FromSql<Text, Pg> for MemberRole {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        MemberRole::from_str(&s).ok_or_else(|| "Unrecognized enum variant".into())
    }
}

impl ToSql<Text, Pg> for MemberRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

/// Game formats and their canonical position lists. Position slots for a
/// template and its instances are always built from this table, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum GameFormat {
    Singles,
    Pairs,
    Triples,
    Fours,
}

impl GameFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameFormat::Singles => "singles",
            GameFormat::Pairs => "pairs",
            GameFormat::Triples => "triples",
            GameFormat::Fours => "fours",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "singles" => Some(GameFormat::Singles),
            "pairs" => Some(GameFormat::Pairs),
            "triples" => Some(GameFormat::Triples),
            "fours" => Some(GameFormat::Fours),
            _ => None,
        }
    }

    pub fn positions(&self) -> &'static [&'static str] {
        match self {
            GameFormat::Singles => &["Skip"],
            GameFormat::Pairs => &["Lead", "Skip"],
            GameFormat::Triples => &["Lead", "Second", "Skip"],
            GameFormat::Fours => &["Lead", "Second", "Third", "Skip"],
        }
    }

    pub fn team_size(&self) -> usize {
        self.positions().len()
    }

    pub fn has_position(&self, position: &str) -> bool {
        self.positions().contains(&position)
    }
}

impl std::fmt::Display for GameFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromSql<Text, Pg> for GameFormat {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        GameFormat::from_str(&s).ok_or_else(|| "Unrecognized enum variant".into())
    }
}

impl ToSql<Text, Pg> for GameFormat {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum BookingGender {
    Men,
    Women,
    Mixed,
    Open,
}

impl BookingGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingGender::Men => "men",
            BookingGender::Women => "women",
            BookingGender::Mixed => "mixed",
            BookingGender::Open => "open",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "men" => Some(BookingGender::Men),
            "women" => Some(BookingGender::Women),
            "mixed" => Some(BookingGender::Mixed),
            "open" => Some(BookingGender::Open),
            _ => None,
        }
    }
}

impl FromSql<Text, Pg> for BookingGender {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        BookingGender::from_str(&s).ok_or_else(|| "Unrecognized enum variant".into())
    }
}

impl ToSql<Text, Pg> for BookingGender {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

/// Pool registration lifecycle. Withdrawn is not terminal (re-registration
/// reactivates the row) and selected is not terminal (a manager may move a
/// member back to available).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Registered,
    Available,
    Selected,
    Withdrawn,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::Available => "available",
            RegistrationStatus::Selected => "selected",
            RegistrationStatus::Withdrawn => "withdrawn",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "registered" => Some(RegistrationStatus::Registered),
            "available" => Some(RegistrationStatus::Available),
            "selected" => Some(RegistrationStatus::Selected),
            "withdrawn" => Some(RegistrationStatus::Withdrawn),
            _ => None,
        }
    }

    pub fn can_transition_to(&self, next: RegistrationStatus) -> bool {
        use RegistrationStatus::*;
        match (self, next) {
            // any status may withdraw, withdrawing twice is a no-op upstream
            (_, Withdrawn) => true,
            (Withdrawn, Registered) => true,
            (Registered, Available) => true,
            (Available, Selected) => true,
            // unselect keeps the registration, no data loss
            (Selected, Available) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromSql<Text, Pg> for RegistrationStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        RegistrationStatus::from_str(&s).ok_or_else(|| "Unrecognized enum variant".into())
    }
}

impl ToSql<Text, Pg> for RegistrationStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

/// Per-assignment availability. Leaves pending exactly once; after that the
/// only way to change participation is a substitution, which resets the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Pending,
    Available,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Pending => "pending",
            Availability::Available => "available",
            Availability::Unavailable => "unavailable",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Availability::Pending),
            "available" => Some(Availability::Available),
            "unavailable" => Some(Availability::Unavailable),
            _ => None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        !matches!(self, Availability::Pending)
    }
}

impl FromSql<Text, Pg> for Availability {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        Availability::from_str(&s).ok_or_else(|| "Unrecognized enum variant".into())
    }
}

impl ToSql<Text, Pg> for Availability {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}
