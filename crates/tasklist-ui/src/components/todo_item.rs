use tasklist_core::{
  Task,
  accept_task_name
};
use web_sys::{
  HtmlInputElement,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
  pub task:      Task,
  pub on_toggle: Callback<String>,
  pub on_delete: Callback<String>,
  pub on_edit:
    Callback<(String, String)>
}

#[function_component(TodoItem)]
pub fn todo_item(
  props: &TodoItemProps
) -> Html {
  let editing = use_state(|| false);
  let new_name = use_state(String::new);

  let id = props.task.id.clone();
  let input_id = format!("{id}-input");
  let edit_id = format!("{id}-edit");

  let on_name_input = {
    let new_name = new_name.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        new_name.set(input.value());
      }
    )
  };

  let on_cancel = {
    let editing = editing.clone();
    let new_name = new_name.clone();
    Callback::from(move |_: web_sys::MouseEvent| {
      new_name.set(String::new());
      editing.set(false);
    })
  };

  let on_save = {
    let editing = editing.clone();
    let new_name = new_name.clone();
    let on_edit = props.on_edit.clone();
    let id = id.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        // A blank rename keeps the form
        // open.
        let Some(name) =
          accept_task_name(&new_name)
        else {
          return;
        };
        on_edit.emit((id.clone(), name.to_string()));
        new_name.set(String::new());
        editing.set(false);
      }
    )
  };

  if *editing {
    return html! {
        <li class="todo">
            <form class="stack-small" onsubmit={on_save}>
                <div class="form-group">
                    <label class="todo-label" for={edit_id.clone()}>
                        { format!("New name for {}", props.task.name) }
                    </label>
                    <input
                        id={edit_id}
                        class="todo-text"
                        type="text"
                        value={(*new_name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class="btn-group">
                    <button type="button" class="btn todo-cancel" onclick={on_cancel}>
                        { "Cancel" }
                        <span class="visually-hidden">{ format!(" renaming {}", props.task.name) }</span>
                    </button>
                    <button type="submit" class="btn btn__primary todo-edit">
                        { "Save" }
                        <span class="visually-hidden">{ format!(" new name for {}", props.task.name) }</span>
                    </button>
                </div>
            </form>
        </li>
    };
  }

  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = id.clone();
    Callback::from(move |_: web_sys::Event| {
      on_toggle.emit(id.clone())
    })
  };

  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = id.clone();
    Callback::from(move |_: web_sys::MouseEvent| {
      on_delete.emit(id.clone())
    })
  };

  let on_start_edit = {
    let editing = editing.clone();
    Callback::from(move |_: web_sys::MouseEvent| {
      editing.set(true)
    })
  };

  html! {
      <li class="todo stack-small">
          <div class="c-cb">
              <input
                  id={input_id.clone()}
                  type="checkbox"
                  checked={props.task.completed}
                  onchange={on_toggle}
              />
              <label class="todo-label" for={input_id}>
                  { props.task.name.clone() }
              </label>
          </div>
          <div class="btn-group">
              <button type="button" class="btn" onclick={on_start_edit}>
                  { "Edit" }
                  <span class="visually-hidden">{ format!(" {}", props.task.name) }</span>
              </button>
              <button type="button" class="btn btn__danger" onclick={on_delete}>
                  { "Delete" }
                  <span class="visually-hidden">{ format!(" {}", props.task.name) }</span>
              </button>
          </div>
      </li>
  }
}
