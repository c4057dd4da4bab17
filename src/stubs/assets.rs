//! Embedded default stub set (form helper `html`)
//!
//! These are the stub templates compiled into the binary. `stubs init`
//! writes them out to a directory so users can customize them; a configured
//! stub directory then takes precedence over this set.

/// Index view stub: the full single-file component
pub const INDEX_VUE: &str = r#"<template>
    <div class="%%vueName%%-index">
        <div class="panel panel-default">
            <div class="panel-heading">
                <h3>%%crudNameCap%%</h3>
                <button type="button" class="btn btn-primary" @click="showCreateForm()">
                    Add %%modelNameCap%%
                </button>
            </div>
            <div class="panel-body">
                <table class="table table-striped">
                    <thead>
                        <tr>%%tableColumnsHtml%%<th>Actions</th></tr>
                    </thead>
                    <tbody>
                        <tr v-for="%%modelName%% in %%crudName%%" :key="%%modelName%%.%%primaryKey%%">
                            %%tableRowHtml%%
                            <td>
                                <button type="button" class="btn btn-xs btn-default" @click="show%%modelNameCap%%(%%modelName%%)">View</button>
                                <button type="button" class="btn btn-xs btn-default" @click="edit%%modelNameCap%%(%%modelName%%)">Edit</button>
                                <button type="button" class="btn btn-xs btn-danger" @click="delete%%modelNameCap%%(%%modelName%%.%%primaryKey%%)">Delete</button>
                            </td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>

        <div class="modal" v-show="formVisible">
            <form @submit.prevent="save%%modelNameCap%%()">
                %%formFieldsHtml%%
                <button type="submit" class="btn btn-primary">Save</button>
                <button type="button" class="btn btn-default" @click="resetForm()">Cancel</button>
            </form>
        </div>

        <div class="modal" v-show="showVisible">
            <table class="table">
                <tbody>
                    %%formBodyHtmlForShowView%%
                </tbody>
            </table>
            <button type="button" class="btn btn-default" @click="showVisible = false">Close</button>
        </div>
    </div>
</template>

<script>
export default {
    data() {
        return {
            %%crudName%%: [],
            %%modelName%%: { %%modelFieldsDefaultHtml%% },
            formVisible: false,
            showVisible: false,
            editing: false
        };
    },
    mounted() {
        this.fetch%%crudNameCap%%();
    },
    methods: {
        fetch%%crudNameCap%%() {
            axios.get('/%%routeGroup%%%%vueName%%').then(response => {
                this.%%crudName%% = response.data;
            });
        },
        showCreateForm() {
            this.resetForm();
            this.formVisible = true;
        },
        show%%modelNameCap%%(%%modelName%%) {
            this.%%modelName%% = Object.assign({}, %%modelName%%);
            this.showVisible = true;
        },
        edit%%modelNameCap%%(%%modelName%%) {
            this.%%modelName%% = Object.assign({}, %%modelName%%);
            this.editing = true;
            this.formVisible = true;
        },
        save%%modelNameCap%%() {
            if (this.editing) {
                axios.put('/%%routeGroup%%%%vueName%%/' + this.%%modelName%%.%%primaryKey%%, { %%postFieldsHtml%% })
                    .then(() => this.fetch%%crudNameCap%%());
            } else {
                axios.post('/%%routeGroup%%%%vueName%%', { %%postFieldsHtml%% })
                    .then(() => this.fetch%%crudNameCap%%());
            }
            this.resetForm();
        },
        delete%%modelNameCap%%(id) {
            axios.delete('/%%routeGroup%%%%vueName%%/' + id)
                .then(() => this.fetch%%crudNameCap%%());
        },
        resetForm() {
            %%resetHtml%%
            this.formVisible = false;
            this.editing = false;
        }
    }
};
</script>
"#;

/// Generic form field with a `type` attribute
pub const FORM_FIELD: &str = r#"<input type="%%fieldType%%" class="form-control" name="%%itemName%%" v-model="%%crudNameSingular%%.%%itemName%%" %%required%%>"#;

/// Generic input for date/time kinds, carries an explicit id
pub const INPUT_FIELD: &str = r#"<input type="%%fieldType%%" class="form-control" id="%%itemName%%" name="%%itemName%%" v-model="%%crudNameSingular%%.%%itemName%%" %%required%%>"#;

/// Password input, no `type` substitution
pub const PASSWORD_FIELD: &str = r#"<input type="password" class="form-control" name="%%itemName%%" v-model="%%crudNameSingular%%.%%itemName%%" %%required%%>"#;

/// Fixed yes/no radio group
pub const RADIO_FIELD: &str = r#"<div class="radio">
    <label><input type="radio" name="%%itemName%%" v-model="%%crudNameSingular%%.%%itemName%%" value="1"> Yes</label>
    <label><input type="radio" name="%%itemName%%" v-model="%%crudNameSingular%%.%%itemName%%" value="0"> No</label>
</div>"#;

/// Textarea field
pub const TEXTAREA_FIELD: &str = r#"<textarea class="form-control" name="%%itemName%%" rows="3" v-model="%%crudNameSingular%%.%%itemName%%" %%required%%></textarea>"#;

/// Select field; options arrive as a comma-separated literal
pub const SELECT_FIELD: &str = r#"<select class="form-control" name="%%itemName%%" v-model="%%crudNameSingular%%.%%itemName%%" %%required%%>
    <option v-for="option in '%%options%%'.split(',')" :value="option">{{ option }}</option>
</select>"#;

/// Label/field-group wrapper applied around every field fragment
pub const WRAP_FIELD: &str = r#"<div class="form-group">
    <label for="%%itemName%%">{{ %%label%% }}</label>
    %%field%%
</div>"#;

/// Stub names of the embedded set, as resolved by the renderer
pub const STUB_NAMES: &[&str] = &[
    "index.vue.stub",
    "form-fields/form-field.vue.stub",
    "form-fields/input-field.vue.stub",
    "form-fields/password-field.vue.stub",
    "form-fields/radio-field.vue.stub",
    "form-fields/textarea-field.vue.stub",
    "form-fields/select-field.vue.stub",
    "form-fields/wrap-field.vue.stub",
];

/// Look up an embedded stub by name
#[must_use]
pub fn get(name: &str) -> Option<&'static str> {
    match name {
        "index.vue.stub" => Some(INDEX_VUE),
        "form-fields/form-field.vue.stub" => Some(FORM_FIELD),
        "form-fields/input-field.vue.stub" => Some(INPUT_FIELD),
        "form-fields/password-field.vue.stub" => Some(PASSWORD_FIELD),
        "form-fields/radio-field.vue.stub" => Some(RADIO_FIELD),
        "form-fields/textarea-field.vue.stub" => Some(TEXTAREA_FIELD),
        "form-fields/select-field.vue.stub" => Some(SELECT_FIELD),
        "form-fields/wrap-field.vue.stub" => Some(WRAP_FIELD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_stub_resolves() {
        for name in STUB_NAMES {
            assert!(get(name).is_some(), "missing embedded stub: {name}");
        }
    }

    #[test]
    fn test_unknown_stub_is_none() {
        assert!(get("form-fields/checkbox-field.vue.stub").is_none());
    }

    #[test]
    fn test_index_stub_carries_expected_placeholders() {
        for placeholder in [
            "%%crudName%%",
            "%%crudNameCap%%",
            "%%modelName%%",
            "%%modelNameCap%%",
            "%%vueName%%",
            "%%routeGroup%%",
            "%%primaryKey%%",
            "%%tableColumnsHtml%%",
            "%%tableRowHtml%%",
            "%%formFieldsHtml%%",
            "%%modelFieldsDefaultHtml%%",
            "%%postFieldsHtml%%",
            "%%resetHtml%%",
        ] {
            assert!(
                INDEX_VUE.contains(placeholder),
                "index stub lost placeholder {placeholder}"
            );
        }
    }
}
