use super::view_model::CategoryEditorViewModel;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a025_category::ParentCategoryOption;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn CategoryEditor(vm: CategoryEditorViewModel) -> impl IntoView {
    // Only open/close re-renders the frame; typing must not recreate the form.
    let is_open = Memo::new(move |_| vm.is_open());

    move || {
        is_open.get().then(|| {
            view! {
                <ModalFrame
                    on_close=Callback::new(move |_| vm.close())
                    overlay_class="category-modal"
                    content_class="category-modal-content"
                >
                    <div class="category-modal-header">
                        <h3>"Редактировать категорию"</h3>
                        <button type="button" class="category-modal-close" on:click=move |_| vm.close()>
                            "×"
                        </button>
                    </div>

                    <div class="category-modal-body">
                        {move || vm.state.with(|s| s.error.clone()).map(|e| view! {
                            <p class="errornote">{e}</p>
                        })}

                        <form
                            id="categoryForm"
                            on:submit=move |ev: ev::SubmitEvent| {
                                ev.prevent_default();
                                vm.save_command();
                            }
                        >
                            <div class="form-group">
                                <label for="categoryName">"Название:"</label>
                                <input
                                    type="text"
                                    id="categoryName"
                                    required=true
                                    prop:value=move || vm.state.with(|s| s.form.name.clone())
                                    on:input=move |ev| vm.set_name(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-group">
                                <label for="categoryParent">"Родительская категория:"</label>
                                <select
                                    id="categoryParent"
                                    on:change=move |ev| vm.set_parent(event_target_value(&ev))
                                >
                                    <option
                                        value=""
                                        prop:selected=move || vm.state.with(|s| s.form.parent_id.is_none())
                                    >
                                        "-- Основная категория --"
                                    </option>
                                    <For
                                        each=move || vm.state.with(|s| s.parent_options.clone())
                                        key=|option| option.id.clone()
                                        children=move |option: ParentCategoryOption| {
                                            let id = option.id.clone();
                                            view! {
                                                <option
                                                    value=option.id
                                                    prop:selected=move || vm.state.with(|s| {
                                                        s.form.parent_id.as_deref() == Some(id.as_str())
                                                    })
                                                >
                                                    {option.display_name}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                                {move || vm.state.with(|s| s.loading_parents).then(|| view! {
                                    <span class="help">"Загрузка..."</span>
                                })}
                            </div>
                        </form>
                    </div>

                    <div class="category-modal-footer">
                        <button type="button" class="btn-cancel" on:click=move |_| vm.close()>
                            "Отмена"
                        </button>
                        <button type="button" class="btn-save" on:click=move |_| vm.save_command()>
                            "Сохранить"
                        </button>
                    </div>
                </ModalFrame>
            }
        })
    }
}
