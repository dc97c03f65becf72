use ss_db::SkillWithAuthor;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDto {
    pub id: String,
    pub title: String,
    /// Author display name, or email when none is set
    pub author: String,
    pub author_id: String,
    pub category: String,
    pub status: String,
    pub created_at: String,
    pub last_modified: String,
}

impl From<SkillWithAuthor> for SkillDto {
    fn from(s: SkillWithAuthor) -> Self {
        let skill = s.skill;
        Self {
            id: skill.id.to_string(),
            author: s.author_name,
            author_id: skill.author_id.to_string(),
            status: skill.status.as_str().to_string(),
            created_at: skill.created_at.to_rfc3339(),
            last_modified: skill.last_modified.to_rfc3339(),
            title: skill.title,
            category: skill.category,
        }
    }
}
