use super::{Field, Rule, Schema};

pub static PROJECT_SCHEMA: Schema = Schema {
    fields: &[
        Field {
            name: "title",
            rules: &[
                Rule::Required("Title is required"),
                Rule::MaxLength(100, "Title must be less than 100 characters"),
            ],
        },
        Field {
            name: "description",
            rules: &[
                Rule::Required("Description is required"),
                Rule::MaxLength(500, "Description must be less than 500 characters"),
            ],
        },
        Field {
            name: "tech_stack",
            rules: &[],
        },
        Field {
            name: "github_link",
            rules: &[Rule::Url("Must be a valid URL")],
        },
        Field {
            name: "demo_link",
            rules: &[Rule::Url("Must be a valid URL")],
        },
        Field {
            name: "summary",
            rules: &[Rule::MaxLength(
                1000,
                "Summary must be less than 1000 characters",
            )],
        },
    ],
};

pub static BLOG_SCHEMA: Schema = Schema {
    fields: &[
        Field {
            name: "title",
            rules: &[
                Rule::Required("Title is required"),
                Rule::MaxLength(255, "Title must be less than 255 characters"),
            ],
        },
        Field {
            name: "content",
            rules: &[Rule::MinLength(
                10,
                "Content must be at least 10 characters",
            )],
        },
        Field {
            name: "summary",
            rules: &[Rule::MaxLength(500, "Summary must be less than 500 characters")],
        },
    ],
};

pub static PROFILE_SCHEMA: Schema = Schema {
    fields: &[
        Field {
            name: "name",
            rules: &[
                Rule::Required("Name is required"),
                Rule::MaxLength(100, "Name must be less than 100 characters"),
            ],
        },
        Field {
            name: "email",
            rules: &[Rule::Email("Must be a valid email")],
        },
        Field {
            name: "github_username",
            rules: &[
                Rule::Required("GitHub username is required"),
                Rule::MaxLength(50, "GitHub username must be less than 50 characters"),
            ],
        },
        Field {
            name: "bio",
            rules: &[Rule::MaxLength(500, "Bio must be less than 500 characters")],
        },
        Field {
            name: "profile_image",
            rules: &[Rule::Url("Must be a valid URL")],
        },
    ],
};
